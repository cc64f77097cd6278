use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("file path is required")]
    MissingFileArgument,
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid Yaak file: {0}")]
    InvalidDocument(String),
    #[error("invalid type \"{0}\": must be either \"env\" or \"collection\"")]
    InvalidMode(String),
    #[error("failed to export workspace \"{workspace}\": {source}")]
    Export {
        workspace: String,
        #[source]
        source: Box<ConvertError>,
    },
}
