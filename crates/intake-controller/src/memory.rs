use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use intake_core::values::FieldValues;
use intake_forms::IntakeForm;
use jiff::civil::Date;

use crate::host::{ErrorDisplay, FormHost, RenderedField};

/// An in-process page: rendered fields and their values, plus a record of
/// everything the controller drew on it.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    dom_id: String,
    values: BTreeMap<String, String>,
    containers: BTreeMap<String, Vec<String>>,
    pub date_max: BTreeMap<String, Date>,
    pub help: BTreeMap<String, String>,
    pub hidden_sections: BTreeSet<String>,
    pub visible_sections: BTreeSet<String>,
    pub progress: Option<u8>,
    pub shown_errors: Vec<String>,
    pub errors_visible: bool,
    pub banner_dismiss: Option<Duration>,
    pub alerts: Vec<String>,
    pub focused: bool,
    pub submitted: bool,
    pub hash: Option<String>,
}

impl MemoryHost {
    /// A page rendering every static field of `form`, all empty.
    pub fn for_form(form: &dyn IntakeForm) -> Self {
        let values = form
            .fields()
            .iter()
            .map(|f| (f.name.clone(), String::new()))
            .collect();
        Self {
            dom_id: form.dom_id().to_string(),
            values,
            ..Self::default()
        }
    }

    pub fn with_hash(mut self, hash: &str) -> Self {
        self.hash = Some(hash.to_string());
        self
    }

    pub fn with_value(mut self, name: &str, value: &str) -> Self {
        self.set_value(name, value);
        self
    }

    /// Render a field inside a container, as the server does when it
    /// re-renders a rejected submission.
    pub fn insert_in_container(&mut self, container: &str, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
        let names = self.containers.entry(container.to_string()).or_default();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    /// Remove a rendered field.
    pub fn remove(&mut self, name: &str) {
        self.values.remove(name);
        for names in self.containers.values_mut() {
            names.retain(|n| n != name);
        }
    }

    /// Names of the fields rendered in a container, in order.
    pub fn container_fields(&self, container: &str) -> &[String] {
        self.containers
            .get(container)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_section_visible(&self, section: &str) -> bool {
        self.visible_sections.contains(section)
    }
}

impl FieldValues for MemoryHost {
    fn value(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

impl FormHost for MemoryHost {
    fn form_exists(&self, dom_id: &str) -> bool {
        self.dom_id == dom_id
    }

    fn set_value(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    fn set_date_max(&mut self, name: &str, max: Date) {
        self.date_max.insert(name.to_string(), max);
    }

    fn attach_help(&mut self, name: &str, text: &str) {
        self.help.insert(name.to_string(), text.to_string());
    }

    fn set_section_visible(&mut self, section: &str, visible: bool) {
        if visible {
            self.hidden_sections.remove(section);
            self.visible_sections.insert(section.to_string());
        } else {
            self.visible_sections.remove(section);
            self.hidden_sections.insert(section.to_string());
        }
    }

    fn render_progress(&mut self, _bar_id: &str, percent: u8) {
        self.progress = Some(percent);
    }

    fn clear_container(&mut self, container: &str) {
        if let Some(names) = self.containers.remove(container) {
            for name in names {
                self.values.remove(&name);
                self.help.remove(&name);
            }
        }
    }

    fn append_field(&mut self, container: &str, field: &RenderedField) {
        self.insert_in_container(container, &field.descriptor.name, &field.value);
    }

    fn show_errors(&mut self, display: &ErrorDisplay, errors: &[String]) {
        self.shown_errors = errors.to_vec();
        self.errors_visible = true;
        self.banner_dismiss = match display {
            ErrorDisplay::Banner { dismiss_after } => Some(*dismiss_after),
            ErrorDisplay::Modal { .. } => None,
        };
    }

    fn reveal_errors(&mut self, _display: &ErrorDisplay) {
        self.errors_visible = true;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn focus_form(&mut self) {
        self.focused = true;
    }

    fn submit(&mut self) {
        self.submitted = true;
    }

    fn location_hash(&self) -> Option<String> {
        self.hash.clone()
    }
}
