use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Config directory not found at {0}. Run 'ledgerview init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Invalid {entity} '{key}': {reason}")]
    InvalidRecord {
        entity: &'static str,
        key: String,
        reason: String,
    },

    #[error("Invalid {flag} date '{value}'. Expected YYYY-MM-DD.")]
    InvalidDate { flag: &'static str, value: String },

    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    #[error("Typst not found. Install it from https://typst.app/ or run: cargo install typst-cli")]
    TypstNotFound,

    #[error("Failed to export table: {0}")]
    Export(String),

    #[error("Failed to serialize table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ViewError {
    pub fn invalid_record(entity: &'static str, key: &str, reason: impl Into<String>) -> Self {
        ViewError::InvalidRecord {
            entity,
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
