use serde::Deserialize;

/// The `resources` container of a Yaak workspace export.
/// Absent lists are treated the same as empty ones.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
    #[serde(default)]
    pub environments: Vec<Environment>,
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub http_requests: Vec<HttpRequest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Folders form a tree per workspace via nullable parent pointers:
/// `folder_id: None` means root-level.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub workspace_id: String,
    #[serde(default)]
    pub folder_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequest {
    pub id: String,
    pub name: String,
    pub workspace_id: String,
    #[serde(default)]
    pub folder_id: Option<String>,
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: Vec<Variable>,
    #[serde(default)]
    pub url_parameters: Vec<Variable>,
    #[serde(default)]
    pub body: Option<RequestBody>,
    #[serde(default)]
    pub body_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: String,
    pub name: String,
    pub workspace_id: String,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

/// The name/value/enabled triple shared by headers, url parameters, and
/// environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Variable {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub enabled: bool,
}
