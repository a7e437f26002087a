//! intake-check
//!
//! Runs a submitted set of field values through a form's controller the
//! way a page would on submit, and reports what the user would see.

use std::path::Path;

use eyre::{Result, WrapErr};
use intake_controller::config::{self, ControllerConfig};
use intake_controller::host::FormHost;
use intake_controller::memory::MemoryHost;
use intake_controller::state::FormState;
use intake_controller::{FormController, SubmitOutcome};
use intake_core::models::field::FieldDescriptor;
use intake_core::models::progress::ProgressState;
use intake_core::values::values_from_json;
use intake_forms::rules::{ConditionalSection, DynamicList};
use intake_forms::{resolve_form, IntakeForm};
use jiff::civil::Date;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of checking one submission.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub form: String,
    pub state: FormState,
    pub submitted: bool,
    pub progress: ProgressState,
    pub errors: Vec<String>,
    /// Fields in the submission the form does not declare.
    pub ignored: Vec<String>,
    /// Alerts raised while the page was set up, e.g. a clamped child count.
    pub alerts: Vec<String>,
}

impl Report {
    pub fn render_text(&self) -> String {
        let verdict = if self.submitted {
            "ok".to_string()
        } else {
            format!("blocked ({} errors)", self.errors.len())
        };
        let mut output = format!(
            "{}: {verdict}, progress {}% ({}/{})\n",
            self.form, self.progress.percent, self.progress.filled, self.progress.total
        );
        for alert in &self.alerts {
            output.push_str(&format!("  ! {alert}\n"));
        }
        for error in &self.errors {
            output.push_str(&format!("  - {error}\n"));
        }
        for name in &self.ignored {
            output.push_str(&format!("  ? ignored unknown field {name}\n"));
        }
        output
    }
}

/// Validate the JSON object of field values in `values_path` against `form_id`.
pub fn check_file(
    form_id: &str,
    values_path: &Path,
    config: ControllerConfig,
    today: Date,
) -> Result<Report> {
    let contents = std::fs::read_to_string(values_path)
        .wrap_err_with(|| format!("failed to read {}", values_path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("{} is not valid JSON", values_path.display()))?;
    check_values(form_id, &json, config, today)
}

pub fn check_values(
    form_id: &str,
    json: &serde_json::Value,
    config: ControllerConfig,
    today: Date,
) -> Result<Report> {
    let form = resolve_form(form_id)?;
    let values = values_from_json(json)?;

    let mut host = MemoryHost::for_form(form.as_ref());
    let mut ignored = Vec::new();
    for (name, value) in &values {
        if form.resolve_field(name).is_err() {
            warn!(form = form_id, field = %name, "ignoring unknown field");
            ignored.push(name.clone());
            continue;
        }
        match form.dynamic_list().filter(|list| list.index_of(name).is_some()) {
            Some(list) => host.insert_in_container(&list.container, name, value),
            None => host.set_value(name, value),
        }
    }
    debug!(form = form_id, fields = values.len(), "submission loaded");

    let mut controller = FormController::attach_on(form, host, config, today)?;
    let outcome = controller.on_submit()?;

    let errors = match outcome {
        SubmitOutcome::Submitted => Vec::new(),
        SubmitOutcome::Blocked(result) => result.errors,
    };
    Ok(Report {
        form: form_id.to_string(),
        state: controller.state(),
        submitted: controller.host().submitted,
        progress: controller.progress(),
        errors,
        ignored,
        alerts: controller.host().alerts.clone(),
    })
}

/// Load a config file when given, else the defaults.
pub fn controller_config(path: Option<&Path>) -> Result<ControllerConfig> {
    match path {
        Some(path) => Ok(config::load_config(path)?),
        None => Ok(ControllerConfig::default()),
    }
}

/// Structure of one form, for `forms --json`.
#[derive(Debug, Serialize)]
pub struct FormSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub dom_id: &'a str,
    pub fields: &'a [FieldDescriptor],
    pub sections: &'a [ConditionalSection],
    pub dynamic_list: Option<&'a DynamicList>,
    pub rules: usize,
}

impl<'a> FormSummary<'a> {
    pub fn of(form: &'a dyn IntakeForm) -> Self {
        Self {
            id: form.id(),
            name: form.name(),
            dom_id: form.dom_id(),
            fields: form.fields(),
            sections: form.sections(),
            dynamic_list: form.dynamic_list(),
            rules: form.rules().len(),
        }
    }
}
