use serde::Serialize;

/// Postman Collection v2.1 document. Field order here is the field order in
/// the written JSON.
#[derive(Debug, Serialize)]
pub struct Collection {
    pub info: CollectionInfo,
    pub item: Vec<Item>,
    pub variable: Vec<PathVariable>,
}

#[derive(Debug, Serialize)]
pub struct CollectionInfo {
    pub name: String,
    pub description: String,
    pub schema: String,
}

/// A collection item is either a folder of further items or a request.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Item {
    Folder(Folder),
    Request(RequestItem),
}

#[derive(Debug, Serialize)]
pub struct Folder {
    pub name: String,
    pub item: Vec<Item>,
}

#[derive(Debug, Serialize)]
pub struct RequestItem {
    pub name: String,
    pub request: RequestDetail,
    pub response: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct RequestDetail {
    pub method: String,
    pub header: Vec<Header>,
    pub url: Url,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

#[derive(Debug, Serialize)]
pub struct Header {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
    pub variable: Vec<PathVariable>,
    pub query: Vec<QueryParam>,
}

#[derive(Debug, Serialize)]
pub struct PathVariable {
    pub id: String,
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
    pub disabled: bool,
}

#[derive(Debug, Serialize)]
pub struct Body {
    pub mode: String,
    pub raw: String,
    pub options: BodyOptions,
}

#[derive(Debug, Serialize)]
pub struct BodyOptions {
    pub raw: RawOptions,
}

#[derive(Debug, Serialize)]
pub struct RawOptions {
    pub language: String,
}

/// Postman environment document.
#[derive(Debug, Serialize)]
pub struct Environment {
    pub name: String,
    pub values: Vec<EnvValue>,
    #[serde(rename = "_postman_variable_scope")]
    pub variable_scope: String,
}

#[derive(Debug, Serialize)]
pub struct EnvValue {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub enabled: bool,
}
