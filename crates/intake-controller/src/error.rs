use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("form '{0}' not found on page")]
    FormNotFound(String),

    #[error("form has already been submitted")]
    AlreadySubmitted,

    #[error("failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedConfigVersion { found: u32, supported: u32 },
}
