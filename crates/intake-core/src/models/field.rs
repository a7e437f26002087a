use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The kind of input element a field is rendered as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Date,
    Email,
    /// Digits-only string such as a phone number, PIN code or Aadhaar number.
    Tel,
    /// Single-choice radio group. Counts as one trackable field.
    Radio { options: Vec<String> },
    Select { options: Vec<String> },
    Checkbox,
}

/// One named field of an intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldDescriptor {
    /// Matches the `name` of the rendered input.
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    /// Hover-help text attached to the rendered input.
    pub help: Option<String>,
    /// Region id of the conditional section holding this field, if any.
    pub section: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            help: None,
            section: None,
        }
    }

    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    pub fn in_section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }

    pub fn is_date(&self) -> bool {
        self.kind == FieldKind::Date
    }
}
