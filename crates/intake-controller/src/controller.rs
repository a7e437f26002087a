use std::collections::BTreeMap;

use intake_core::dates;
use intake_core::models::field::FieldDescriptor;
use intake_core::models::progress::ProgressState;
use intake_core::models::validation::ValidationResult;
use intake_core::values::FieldValues;
use intake_forms::IntakeForm;
use jiff::civil::Date;
use tracing::{debug, info, warn};

use crate::config::ControllerConfig;
use crate::error::ControllerError;
use crate::host::{FormHost, RenderedField};
use crate::state::FormState;

/// A user interaction delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Input { field: String },
    Change { field: String },
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the native submission was released.
    Submitted,
    /// Submission prevented; the messages were shown to the user.
    Blocked(ValidationResult),
}

/// Result of regenerating the dynamic list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regeneration {
    Rebuilt { count: usize },
    /// The requested count exceeded the bound; the count field was clamped
    /// and the existing items left untouched.
    Rejected { requested: usize },
    /// The form has no dynamic list, or its count field is not rendered.
    NotApplicable,
}

/// Controller for one form bound to one host page.
///
/// Owns the descriptor table: the form's static fields followed by the
/// dynamic list items currently rendered. Every handler works from this
/// table and the host's live values.
pub struct FormController<H: FormHost> {
    form: Box<dyn IntakeForm>,
    host: H,
    config: ControllerConfig,
    today: Date,
    table: Vec<FieldDescriptor>,
    static_len: usize,
    state: FormState,
    progress: ProgressState,
}

impl<H: FormHost> FormController<H> {
    /// Bind `form` to `host` using the current date.
    pub fn attach(
        form: Box<dyn IntakeForm>,
        host: H,
        config: ControllerConfig,
    ) -> Result<Self, ControllerError> {
        Self::attach_on(form, host, config, dates::today())
    }

    /// Bind `form` to `host`, treating `today` as the current date.
    pub fn attach_on(
        form: Box<dyn IntakeForm>,
        host: H,
        config: ControllerConfig,
        today: Date,
    ) -> Result<Self, ControllerError> {
        if !host.form_exists(form.dom_id()) {
            warn!(form = form.id(), dom_id = form.dom_id(), "form element not found");
            return Err(ControllerError::FormNotFound(form.dom_id().to_string()));
        }

        let table = form.fields().to_vec();
        let static_len = table.len();
        let mut controller = Self {
            form,
            host,
            config,
            today,
            table,
            static_len,
            state: FormState::Idle,
            progress: ProgressState::default(),
        };

        for field in &controller.table {
            if !controller.host.is_present(&field.name) {
                continue;
            }
            if field.is_date() {
                controller.host.set_date_max(&field.name, today);
            }
            if let Some(help) = &field.help {
                controller.host.attach_help(&field.name, help);
            }
        }

        controller.regenerate_dynamic();
        controller.apply_sections();
        controller.update_progress();

        let flagged = controller
            .host
            .location_hash()
            .is_some_and(|hash| hash == controller.config.server_error_fragment);
        if flagged {
            controller.state = FormState::ServerFlaggedError;
            let display = controller.config.error_display();
            controller.host.reveal_errors(&display);
        }

        info!(
            form = controller.form.id(),
            percent = controller.progress.percent,
            state = ?controller.state,
            "form controller attached"
        );
        Ok(controller)
    }

    pub fn form(&self) -> &dyn IntakeForm {
        self.form.as_ref()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    pub fn today(&self) -> Date {
        self.today
    }

    /// Static descriptors followed by the rendered dynamic items.
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.table
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn is_tracked(&self, field: &str) -> bool {
        self.table.iter().any(|d| d.name == field)
    }

    /// Route one event. Only `Submit` yields an outcome.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<Option<SubmitOutcome>, ControllerError> {
        match event {
            FormEvent::Input { field } => {
                self.on_input(&field);
                Ok(None)
            }
            FormEvent::Change { field } => {
                self.on_change(&field);
                Ok(None)
            }
            FormEvent::Submit => self.on_submit().map(Some),
        }
    }

    pub fn on_input(&mut self, field: &str) {
        if self.state.is_terminal() || !self.is_tracked(field) {
            return;
        }
        self.state = self.state.on_edit();
        self.update_progress();
    }

    pub fn on_change(&mut self, field: &str) {
        if self.state.is_terminal() || !self.is_tracked(field) {
            return;
        }
        self.state = self.state.on_edit();

        let is_count_field = self
            .form
            .dynamic_list()
            .is_some_and(|list| list.count_field == field);
        if is_count_field {
            self.regenerate_dynamic();
        }

        let governs_section = self
            .form
            .sections()
            .iter()
            .any(|s| s.governing_field == field);
        if governs_section {
            self.apply_sections();
        }

        self.update_progress();
    }

    /// Validate and either release the native submission or block it and
    /// show the collected messages.
    pub fn on_submit(&mut self) -> Result<SubmitOutcome, ControllerError> {
        if self.state.is_terminal() {
            return Err(ControllerError::AlreadySubmitted);
        }

        let result = self.validate();
        self.state = self.state.on_validated(result.is_valid());

        if result.is_valid() {
            info!(form = self.form.id(), "validation passed, submitting");
            self.host.submit();
            return Ok(SubmitOutcome::Submitted);
        }

        info!(
            form = self.form.id(),
            errors = result.len(),
            "submission blocked by validation"
        );
        let display = self.config.error_display();
        self.host.show_errors(&display, &result.errors);
        self.host.focus_form();
        Ok(SubmitOutcome::Blocked(result))
    }

    /// The validation pass over the host's current values. Never writes to
    /// the host.
    pub fn validate(&self) -> ValidationResult {
        self.form.validate(&self.host, self.today)
    }

    /// Recount filled fields among those currently rendered and redraw the
    /// progress bar.
    pub fn update_progress(&mut self) -> ProgressState {
        let mut filled = 0;
        let mut total = 0;
        for field in &self.table {
            let Some(value) = self.host.value(&field.name) else {
                continue;
            };
            total += 1;
            if !value.trim().is_empty() {
                filled += 1;
            }
        }

        self.progress = ProgressState::from_counts(filled, total);
        self.host
            .render_progress(&self.config.progress_bar_id, self.progress.percent);
        debug!(
            form = self.form.id(),
            filled,
            total,
            percent = self.progress.percent,
            "progress updated"
        );
        self.progress
    }

    /// Show each conditional section iff its governing field holds the
    /// revealing value.
    pub fn apply_sections(&mut self) {
        for section in self.form.sections() {
            let visible = section.is_visible(&self.host);
            self.host.set_section_visible(&section.id, visible);
        }
    }

    /// Rebuild the dynamic list from the count field, keeping every value
    /// whose index is still in range.
    pub fn regenerate_dynamic(&mut self) -> Regeneration {
        let Some(list) = self.form.dynamic_list().cloned() else {
            return Regeneration::NotApplicable;
        };
        if !self.host.is_present(&list.count_field) {
            return Regeneration::NotApplicable;
        }

        let mut snapshot: BTreeMap<usize, String> = (1..=list.max_items)
            .filter_map(|i| {
                self.host
                    .value(&list.item_name(i))
                    .filter(|v| !v.is_empty())
                    .map(|v| (i, v))
            })
            .collect();

        let requested = list.requested_count(&self.host);
        if requested > list.max_items {
            warn!(
                form = self.form.id(),
                requested,
                max = list.max_items,
                "dynamic list bound exceeded"
            );
            self.host.alert(&list.bound_message());
            self.host
                .set_value(&list.count_field, &list.max_items.to_string());
            return Regeneration::Rejected { requested };
        }

        self.host.clear_container(&list.container);
        self.table.truncate(self.static_len);
        let mut restored = 0;
        for index in 1..=requested {
            let descriptor = list.item_descriptor(index);
            let value = snapshot.remove(&index).unwrap_or_default();
            if !value.is_empty() {
                restored += 1;
            }
            let rendered = RenderedField {
                value,
                min: list.item_min,
                max: list.item_max,
                descriptor: descriptor.clone(),
            };
            self.host.append_field(&list.container, &rendered);
            if let Some(help) = &descriptor.help {
                self.host.attach_help(&descriptor.name, help);
            }
            self.table.push(descriptor);
        }

        debug!(
            form = self.form.id(),
            count = requested,
            restored,
            "dynamic list rebuilt"
        );
        self.update_progress();
        Regeneration::Rebuilt { count: requested }
    }
}
