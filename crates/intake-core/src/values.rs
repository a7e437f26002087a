use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::CoreError;

/// Read access to the live values of a form's fields.
///
/// `None` means the field is not rendered at all. A rendered but empty
/// field, an unchecked checkbox and a radio group with nothing selected all
/// read as `Some("")`; a radio group otherwise reads as its selected option.
pub trait FieldValues {
    fn value(&self, name: &str) -> Option<String>;

    fn is_present(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// The trimmed value, or `None` when absent or blank.
    fn filled(&self, name: &str) -> Option<String> {
        self.value(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn is_filled(&self, name: &str) -> bool {
        self.filled(name).is_some()
    }
}

impl<S: BuildHasher> FieldValues for HashMap<String, String, S> {
    fn value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FieldValues for BTreeMap<String, String> {
    fn value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Convert a submitted JSON object into field values.
///
/// Numbers are rendered as their JSON text, `true` as a checked checkbox
/// (`"on"`), and `false` / `null` as an empty field.
pub fn values_from_json(json: &serde_json::Value) -> Result<BTreeMap<String, String>, CoreError> {
    let obj = json.as_object().ok_or(CoreError::InvalidValues)?;
    let mut values = BTreeMap::new();
    for (name, value) in obj {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(true) => "on".to_string(),
            serde_json::Value::Bool(false) | serde_json::Value::Null => String::new(),
            _ => return Err(CoreError::InvalidValues),
        };
        values.insert(name.clone(), text);
    }
    Ok(values)
}
