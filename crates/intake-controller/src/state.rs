use serde::{Deserialize, Serialize};

/// Lifecycle of one bound form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    /// Attached, no user input yet.
    Idle,
    Editing,
    /// The last submit attempt was blocked by client-side validation.
    ValidationFailed,
    /// The page was loaded after the server rejected a submission.
    ServerFlaggedError,
    /// Validation passed and the native submission was released. Terminal.
    Submitting,
}

impl FormState {
    pub fn on_edit(self) -> Self {
        match self {
            FormState::Submitting => FormState::Submitting,
            _ => FormState::Editing,
        }
    }

    pub fn on_validated(self, valid: bool) -> Self {
        match self {
            FormState::Submitting => FormState::Submitting,
            _ if valid => FormState::Submitting,
            _ => FormState::ValidationFailed,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == FormState::Submitting
    }

    /// Whether the error surface is currently showing.
    pub fn shows_errors(self) -> bool {
        matches!(
            self,
            FormState::ValidationFailed | FormState::ServerFlaggedError
        )
    }
}
