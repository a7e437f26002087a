//! intake-forms
//!
//! Intake form definitions. Pure data, no DOM dependency.
//! Defines the fields, conditional sections, dynamic lists and validation
//! rules of each registration form, and the validation pass over them.

pub mod error;
pub mod forms;
pub mod rules;

use intake_core::models::field::FieldDescriptor;
use intake_core::models::validation::ValidationResult;
use intake_core::values::FieldValues;
use jiff::civil::Date;

use error::FormError;
use rules::{ConditionalSection, DynamicList, Rule};

/// Trait implemented by each registration form.
pub trait IntakeForm: Send + Sync {
    /// Unique identifier for this form (e.g., "oocyte_donor").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Oocyte Donor Registration").
    fn name(&self) -> &str;

    /// Identifier of the `<form>` element in the markup.
    fn dom_id(&self) -> &str;

    /// Static fields, in markup order. Dynamic list items are not included.
    fn fields(&self) -> &[FieldDescriptor];

    /// Validation rules, in the order their messages are reported.
    fn rules(&self) -> &[Rule];

    fn sections(&self) -> &[ConditionalSection] {
        &[]
    }

    fn dynamic_list(&self) -> Option<&DynamicList> {
        None
    }

    fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Look up a static field or a dynamic list item by name.
    fn resolve_field(&self, name: &str) -> Result<FieldDescriptor, FormError> {
        if let Some(field) = self.field(name) {
            return Ok(field.clone());
        }
        self.dynamic_list()
            .and_then(|list| list.index_of(name).map(|i| list.item_descriptor(i)))
            .ok_or_else(|| FormError::UnknownField {
                form_id: self.id().to_string(),
                field: name.to_string(),
            })
    }

    /// Run every rule against `values`, then range-check the dynamic list.
    fn validate(&self, values: &dyn FieldValues, today: Date) -> ValidationResult {
        let mut result = ValidationResult::default();
        for rule in self.rules() {
            if let Some(message) = rule.evaluate(values, today) {
                result.push(message);
            }
        }
        if let Some(list) = self.dynamic_list() {
            list.validate_items(values, &mut result);
        }
        result
    }

    /// Format the form's structure as text, one line per field.
    fn describe(&self) -> String {
        let mut output = format!("## {} ({})\n\n", self.name(), self.id());
        for field in self.fields() {
            output.push_str(&format!("- {}: {}", field.name, field.label));
            if let Some(section) = &field.section {
                output.push_str(&format!(" [{section}]"));
            }
            output.push('\n');
        }
        if let Some(list) = self.dynamic_list() {
            output.push_str(&format!(
                "- {}..{}: {} (up to {}, driven by {})\n",
                list.item_name(1),
                list.item_name(list.max_items),
                list.label,
                list.max_items,
                list.count_field,
            ));
        }
        output
    }
}

/// Return all registered forms.
pub fn all_forms() -> Vec<Box<dyn IntakeForm>> {
    vec![
        Box::new(forms::couple::CommissioningCouple),
        Box::new(forms::oocyte_donor::OocyteDonor),
        Box::new(forms::sperm_donor::SpermDonor),
    ]
}

/// Look up a form by ID.
pub fn get_form(id: &str) -> Option<Box<dyn IntakeForm>> {
    all_forms().into_iter().find(|f| f.id() == id)
}

/// Look up a form by ID, failing with [`FormError::UnknownForm`].
pub fn resolve_form(id: &str) -> Result<Box<dyn IntakeForm>, FormError> {
    get_form(id).ok_or_else(|| FormError::UnknownForm(id.to_string()))
}
