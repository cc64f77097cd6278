pub mod environment;
pub mod folder;
pub mod request;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_json::Value;

use crate::error::ConvertError;
use crate::model::postman::{Collection, CollectionInfo};
use crate::model::yaak;
use crate::storage::file;

use self::environment::convert_environment;
use self::folder::FolderArena;
use self::request::convert_request;

const POSTMAN_SCHEMA: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Which conversion to run for each workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    Collection,
    Env,
}

impl FromStr for ExportMode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collection" => Ok(Self::Collection),
            "env" => Ok(Self::Env),
            other => Err(ConvertError::InvalidMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Collection,
    Environment,
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection => f.write_str("collection"),
            Self::Environment => f.write_str("environment"),
        }
    }
}

/// Descriptor of one written output file.
#[derive(Debug)]
pub struct ExportResult {
    pub kind: ExportKind,
    pub workspace_name: String,
    pub environment_name: Option<String>,
    pub output_path: PathBuf,
}

/// Convert every workspace in `document`, writing output files next to the
/// source file. Workspaces are processed strictly in source order; any
/// failure aborts the whole run.
pub fn convert_document(
    document: &Value,
    source_path: &Path,
    mode: ExportMode,
) -> Result<Vec<ExportResult>, ConvertError> {
    let resources = parse_resources(document)?;
    let out_dir = source_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut results = Vec::new();
    for workspace in &resources.workspaces {
        let exported = match mode {
            ExportMode::Collection => {
                export_collection(&resources, workspace, &out_dir).map(|r| vec![r])
            }
            ExportMode::Env => export_environments(&resources, workspace, &out_dir),
        };
        results.extend(exported.map_err(|e| ConvertError::Export {
            workspace: workspace.name.clone(),
            source: Box::new(e),
        })?);
    }
    Ok(results)
}

/// Minimal shape check: the document must carry a `resources` container with
/// a `workspaces` entry. Anything beyond that is left to deserialization.
fn parse_resources(document: &Value) -> Result<yaak::Resources, ConvertError> {
    let resources = document
        .get("resources")
        .filter(|r| r.get("workspaces").is_some())
        .ok_or_else(|| {
            ConvertError::InvalidDocument("workspaces structure not found".to_string())
        })?;
    Ok(serde_json::from_value(resources.clone())?)
}

/// Build and write one Postman collection for `workspace`.
///
/// Requests that resolve to a known folder nest under it; the rest land on
/// the collection root, ahead of all root folders.
fn export_collection(
    resources: &yaak::Resources,
    workspace: &yaak::Workspace,
    out_dir: &Path,
) -> Result<ExportResult, ConvertError> {
    let mut arena = FolderArena::for_workspace(&resources.folders, &workspace.id);

    let mut items = Vec::new();
    for http_request in resources.http_requests.iter().filter(|r| r.workspace_id == workspace.id) {
        let item = convert_request(http_request);
        if let Some(item) = arena.attach_request(http_request.folder_id.as_deref(), item) {
            items.push(item);
        }
    }
    items.extend(arena.into_roots());

    let collection = Collection {
        info: CollectionInfo {
            name: workspace.name.clone(),
            description: workspace.description.clone().unwrap_or_default(),
            schema: POSTMAN_SCHEMA.to_string(),
        },
        item: items,
        variable: Vec::new(),
    };

    let output_path = out_dir.join(format!("{}_collection.json", workspace.name.to_lowercase()));
    file::save_json(&output_path, &collection)?;

    Ok(ExportResult {
        kind: ExportKind::Collection,
        workspace_name: workspace.name.clone(),
        environment_name: None,
        output_path,
    })
}

/// Write one Postman environment file per source environment belonging to
/// `workspace`.
fn export_environments(
    resources: &yaak::Resources,
    workspace: &yaak::Workspace,
    out_dir: &Path,
) -> Result<Vec<ExportResult>, ConvertError> {
    let mut results = Vec::new();
    for env in resources.environments.iter().filter(|e| e.workspace_id == workspace.id) {
        let postman_env = convert_environment(env);
        let output_path = out_dir.join(format!(
            "{}_environment_{}.json",
            workspace.name.to_lowercase(),
            env.name.to_lowercase()
        ));
        file::save_json(&output_path, &postman_env)?;
        results.push(ExportResult {
            kind: ExportKind::Environment,
            workspace_name: workspace.name.clone(),
            environment_name: Some(env.name.clone()),
            output_path,
        });
    }
    Ok(results)
}
