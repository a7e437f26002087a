use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ControllerError;
use crate::host::ErrorDisplay;

/// Current config version. Bump this when changing the shape of
/// [`ControllerConfig`].
const CURRENT_VERSION: u32 = 1;

/// How collected validation errors are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStyle {
    /// A list inside a modal dialog.
    #[default]
    Modal,
    /// A dismissible banner prepended to the form that removes itself.
    Banner,
}

/// Markup identifiers and presentation settings the controller needs from
/// the host page. Defaults match the shipped templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Schema version. Missing = current.
    pub config_version: u32,
    pub progress_bar_id: String,
    pub error_list_id: String,
    pub error_modal_id: String,
    /// URL fragment the server redirects to after rejecting a submission.
    pub server_error_fragment: String,
    pub error_style: ErrorStyle,
    pub banner_dismiss_ms: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            progress_bar_id: "progressBar".to_string(),
            error_list_id: "errorList".to_string(),
            error_modal_id: "errorModal".to_string(),
            server_error_fragment: "#errorModal".to_string(),
            error_style: ErrorStyle::Modal,
            banner_dismiss_ms: 5000,
        }
    }
}

impl ControllerConfig {
    pub fn error_display(&self) -> ErrorDisplay {
        match self.error_style {
            ErrorStyle::Modal => ErrorDisplay::Modal {
                modal_id: self.error_modal_id.clone(),
                list_id: self.error_list_id.clone(),
            },
            ErrorStyle::Banner => ErrorDisplay::Banner {
                dismiss_after: Duration::from_millis(self.banner_dismiss_ms),
            },
        }
    }
}

pub fn parse_config(contents: &str) -> Result<ControllerConfig, ControllerError> {
    let config: ControllerConfig = serde_json::from_str(contents)?;
    if config.config_version > CURRENT_VERSION {
        return Err(ControllerError::UnsupportedConfigVersion {
            found: config.config_version,
            supported: CURRENT_VERSION,
        });
    }
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<ControllerConfig, ControllerError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ControllerError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents)?;
    tracing::info!(path = %path.display(), "controller config loaded");
    Ok(config)
}
