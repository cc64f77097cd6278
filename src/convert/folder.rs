use std::collections::HashMap;

use crate::model::postman::{Folder, Item};
use crate::model::yaak;

/// Arena of folder nodes for a single workspace, keyed by source folder id.
///
/// Source folders are flat records with nullable parent pointers. Nodes are
/// stored in source order (which keeps the output deterministic) and linked
/// by id lookup rather than live references: each nested node records its
/// slot on the parent, each root node is emitted in [`FolderArena::into_roots`].
pub struct FolderArena {
    nodes: Vec<Option<FolderNode>>,
    index: HashMap<String, usize>,
    roots: Vec<usize>,
}

struct FolderNode {
    name: String,
    subfolders: Vec<usize>,
    requests: Vec<Item>,
}

impl FolderArena {
    /// Build the arena from the full folder list, restricted to `workspace_id`.
    ///
    /// A folder whose parent is null, unknown, outside the workspace, or
    /// itself is a root. Every other folder is attached to its parent's
    /// subfolder list; attachment is a map lookup, so multi-level nesting
    /// works regardless of record order.
    pub fn for_workspace(folders: &[yaak::Folder], workspace_id: &str) -> Self {
        let workspace_folders: Vec<&yaak::Folder> =
            folders.iter().filter(|f| f.workspace_id == workspace_id).collect();

        let mut nodes = Vec::with_capacity(workspace_folders.len());
        let mut index = HashMap::with_capacity(workspace_folders.len());
        for folder in &workspace_folders {
            index.insert(folder.id.clone(), nodes.len());
            nodes.push(Some(FolderNode {
                name: folder.name.clone(),
                subfolders: Vec::new(),
                requests: Vec::new(),
            }));
        }

        let mut roots = Vec::new();
        for (slot, folder) in workspace_folders.iter().enumerate() {
            let parent = folder
                .folder_id
                .as_ref()
                .and_then(|id| index.get(id).copied())
                .filter(|&p| p != slot);
            match parent {
                Some(parent) => {
                    if let Some(node) = nodes[parent].as_mut() {
                        node.subfolders.push(slot);
                    }
                }
                None => roots.push(slot),
            }
        }

        Self { nodes, index, roots }
    }

    /// Attach a converted request to its folder. Returns the item back when
    /// `folder_id` does not resolve, so the caller can place it at the
    /// collection root.
    pub fn attach_request(&mut self, folder_id: Option<&str>, request: Item) -> Option<Item> {
        let slot = folder_id.and_then(|id| self.index.get(id).copied());
        match slot.and_then(|s| self.nodes[s].as_mut()) {
            Some(node) => {
                node.requests.push(request);
                None
            }
            None => Some(request),
        }
    }

    /// Consume the arena and emit root folders in source order, each built as
    /// subfolders followed by requests.
    pub fn into_roots(mut self) -> Vec<Item> {
        let roots = std::mem::take(&mut self.roots);
        roots.into_iter().filter_map(|slot| self.build(slot)).collect()
    }

    // Each slot is taken at most once, so a parent chain that cycles cannot
    // recurse forever; its nodes are unreachable from any root and dropped.
    fn build(&mut self, slot: usize) -> Option<Item> {
        let node = self.nodes[slot].take()?;
        let mut items = Vec::with_capacity(node.subfolders.len() + node.requests.len());
        for child in node.subfolders {
            if let Some(item) = self.build(child) {
                items.push(item);
            }
        }
        items.extend(node.requests);
        Some(Item::Folder(Folder { name: node.name, item: items }))
    }
}
