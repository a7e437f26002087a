use std::time::Duration;

use intake_core::models::field::FieldDescriptor;
use intake_core::values::FieldValues;
use jiff::civil::Date;

/// Where collected errors are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDisplay {
    Modal { modal_id: String, list_id: String },
    /// Removes itself after `dismiss_after` with no further interaction.
    Banner { dismiss_after: Duration },
}

/// A generated input appended to a dynamic list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub descriptor: FieldDescriptor,
    pub value: String,
    pub min: i64,
    pub max: i64,
}

/// The page a form controller is bound to.
///
/// Value reads come from [`FieldValues`]: `None` for a field that is not
/// rendered, the selected option for a radio group, empty for an unchecked
/// checkbox or radio group.
pub trait FormHost: FieldValues {
    /// Whether a `<form>` with this identifier exists.
    fn form_exists(&self, dom_id: &str) -> bool;

    fn set_value(&mut self, name: &str, value: &str);

    /// Set the `max` attribute of a date input.
    fn set_date_max(&mut self, name: &str, max: Date);

    /// Attach hover-help to a field.
    fn attach_help(&mut self, name: &str, text: &str);

    fn set_section_visible(&mut self, section: &str, visible: bool);

    /// Render `percent` as the bar width and its `aria-valuenow`.
    fn render_progress(&mut self, bar_id: &str, percent: u8);

    /// Remove every field rendered inside a container.
    fn clear_container(&mut self, container: &str);

    fn append_field(&mut self, container: &str, field: &RenderedField);

    /// Replace the error surface's contents with `errors` and show it.
    fn show_errors(&mut self, display: &ErrorDisplay, errors: &[String]);

    /// Show the error surface as the server rendered it.
    fn reveal_errors(&mut self, display: &ErrorDisplay);

    /// A blocking user-visible message.
    fn alert(&mut self, message: &str);

    /// Return keyboard focus to the form.
    fn focus_form(&mut self);

    /// Let the native form submission proceed.
    fn submit(&mut self);

    /// The URL fragment, including the leading `#`.
    fn location_hash(&self) -> Option<String>;
}
