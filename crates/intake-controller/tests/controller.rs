use std::time::Duration;

use intake_controller::config::{ControllerConfig, ErrorStyle};
use intake_controller::error::ControllerError;
use intake_controller::host::FormHost;
use intake_controller::memory::MemoryHost;
use intake_controller::state::FormState;
use intake_controller::{FormController, FormEvent, SubmitOutcome};
use intake_core::values::FieldValues;
use intake_forms::forms::couple::CommissioningCouple;
use intake_forms::forms::oocyte_donor::OocyteDonor;
use intake_forms::get_form;
use jiff::civil::{date, Date};

const TODAY: Date = date(2024, 6, 15);

fn attach(form_id: &str, host: MemoryHost) -> FormController<MemoryHost> {
    let form = get_form(form_id).expect("registered form");
    FormController::attach_on(form, host, ControllerConfig::default(), TODAY)
        .expect("form attaches")
}

fn couple_host() -> MemoryHost {
    MemoryHost::for_form(&CommissioningCouple)
}

fn fill_required_couple(host: &mut MemoryHost) {
    for (name, value) in [
        ("female_name", "Lakshmi Rao"),
        ("male_name", "Suresh Rao"),
        ("female_aadhaar", "123456789012"),
        ("female_dob", "1990-04-12"),
        ("male_dob", "1987-11-02"),
        ("ivf_name", "Nelamangala Fertility Centre"),
        ("ivf_address", "B.H Road, Nelamangala"),
        ("doctor_name", "Dr. Ravikumar"),
    ] {
        host.set_value(name, value);
    }
}

#[test]
fn attach_fails_without_form_element() {
    let host = MemoryHost::for_form(&OocyteDonor);
    let form = get_form("commissioning_couple").unwrap();
    let err = FormController::attach_on(form, host, ControllerConfig::default(), TODAY)
        .err()
        .expect("attach should fail");
    assert!(matches!(err, ControllerError::FormNotFound(id) if id == "commissioningCoupleForm"));
}

#[test]
fn attach_initializes_dates_help_and_progress() {
    let controller = attach("commissioning_couple", couple_host());
    let host = controller.host();

    assert_eq!(controller.state(), FormState::Idle);
    assert_eq!(host.date_max.get("female_dob"), Some(&TODAY));
    assert_eq!(host.date_max.get("male_dob"), Some(&TODAY));
    assert_eq!(host.date_max.len(), 2);
    assert_eq!(
        host.help.get("female_aadhaar").map(String::as_str),
        Some("12-digit Aadhaar number")
    );
    assert_eq!(host.progress, Some(0));
    assert!(!host.errors_visible);
}

#[test]
fn server_error_fragment_reveals_errors_on_load() {
    let controller = attach("commissioning_couple", couple_host().with_hash("#errorModal"));
    assert_eq!(controller.state(), FormState::ServerFlaggedError);
    assert!(controller.state().shows_errors());
    assert!(controller.host().errors_visible);

    let controller = attach("commissioning_couple", couple_host().with_hash("#top"));
    assert_eq!(controller.state(), FormState::Idle);
    assert!(!controller.host().errors_visible);
}

#[test]
fn half_filled_form_shows_fifty_percent() {
    let mut controller = attach("commissioning_couple", couple_host());
    let total = controller.form().fields().len();
    assert_eq!(total % 2, 0);

    let names: Vec<String> = controller.form().fields()[..total / 2]
        .iter()
        .map(|f| f.name.clone())
        .collect();
    for name in &names {
        controller.host_mut().set_value(name, "x");
        controller.on_input(name);
    }

    assert_eq!(controller.progress().filled, total / 2);
    assert_eq!(controller.progress().percent, 50);
    assert_eq!(controller.host().progress, Some(50));
    assert_eq!(controller.state(), FormState::Editing);
}

#[test]
fn progress_skips_fields_missing_from_page() {
    let mut host = couple_host();
    host.remove("place");
    let mut controller = attach("commissioning_couple", host);

    // 15 rendered fields, 7 filled: 46.67 rounds to 47
    for name in [
        "female_name",
        "male_name",
        "female_age",
        "male_age",
        "district",
        "state",
        "doctor_name",
    ] {
        controller.host_mut().set_value(name, "x");
    }
    let progress = controller.update_progress();
    assert_eq!(progress.total, 15);
    assert_eq!(progress.filled, 7);
    assert_eq!(progress.percent, 47);
}

#[test]
fn whitespace_does_not_count_as_filled() {
    let mut controller = attach("commissioning_couple", couple_host());
    controller.host_mut().set_value("female_name", "   ");
    controller.on_input("female_name");
    assert_eq!(controller.progress().filled, 0);
}

#[test]
fn events_on_untracked_fields_are_ignored() {
    let mut controller = attach("commissioning_couple", couple_host());
    controller.on_input("csrf_token");
    controller.on_change("csrf_token");
    assert_eq!(controller.state(), FormState::Idle);
}

#[test]
fn sections_follow_their_radio() {
    let mut controller = attach("oocyte_donor", MemoryHost::for_form(&OocyteDonor));
    assert!(!controller.host().is_section_visible("tobacco_details"));
    assert!(!controller.host().is_section_visible("alcohol_details"));

    controller.host_mut().set_value("tobacco_use", "Yes");
    controller.on_change("tobacco_use");
    assert!(controller.host().is_section_visible("tobacco_details"));
    assert!(!controller.host().is_section_visible("alcohol_details"));

    controller.host_mut().set_value("tobacco_use", "No");
    controller.on_change("tobacco_use");
    assert!(!controller.host().is_section_visible("tobacco_details"));
}

#[test]
fn hidden_section_fields_still_count_toward_progress() {
    let mut controller = attach("oocyte_donor", MemoryHost::for_form(&OocyteDonor));
    let before = controller.progress().filled;

    controller.host_mut().set_value("alcohol_frequency", "weekly");
    controller.on_input("alcohol_frequency");
    assert!(!controller.host().is_section_visible("alcohol_details"));
    assert_eq!(controller.progress().filled, before + 1);
}

#[test]
fn blocked_submit_shows_errors_and_recovers() {
    let mut controller = attach("commissioning_couple", couple_host());

    let result = match controller.dispatch(FormEvent::Submit).unwrap() {
        Some(SubmitOutcome::Blocked(result)) => result,
        other => panic!("expected blocked submission, got {other:?}"),
    };
    assert_eq!(result.len(), 8);
    assert_eq!(controller.state(), FormState::ValidationFailed);
    assert_eq!(controller.host().shown_errors, result.errors);
    assert!(controller.host().errors_visible);
    assert!(controller.host().focused);
    assert!(!controller.host().submitted);
    assert_eq!(controller.host().banner_dismiss, None);

    fill_required_couple(controller.host_mut());
    controller
        .dispatch(FormEvent::Input {
            field: "doctor_name".to_string(),
        })
        .unwrap();
    assert_eq!(controller.state(), FormState::Editing);

    assert_eq!(controller.on_submit().unwrap(), SubmitOutcome::Submitted);
    assert_eq!(controller.state(), FormState::Submitting);
    assert!(controller.host().submitted);
}

#[test]
fn valid_couple_submits_without_touching_optional_fields() {
    let mut host = couple_host();
    fill_required_couple(&mut host);
    let mut controller = attach("commissioning_couple", host);

    assert!(controller.validate().is_valid());
    assert_eq!(controller.on_submit().unwrap(), SubmitOutcome::Submitted);
    assert!(controller.host().submitted);
    assert!(controller.host().shown_errors.is_empty());
    assert_eq!(controller.host().value("female_age").as_deref(), Some(""));
}

#[test]
fn submitting_is_terminal() {
    let mut host = couple_host();
    fill_required_couple(&mut host);
    let mut controller = attach("commissioning_couple", host);
    controller.on_submit().unwrap();

    assert!(matches!(
        controller.on_submit(),
        Err(ControllerError::AlreadySubmitted)
    ));
    controller.host_mut().set_value("place", "Bengaluru");
    controller.on_input("place");
    assert_eq!(controller.state(), FormState::Submitting);
}

#[test]
fn server_flagged_form_returns_to_editing_on_input() {
    let mut controller = attach("commissioning_couple", couple_host().with_hash("#errorModal"));
    controller.host_mut().set_value("female_name", "Lakshmi");
    controller.on_input("female_name");
    assert_eq!(controller.state(), FormState::Editing);
}

#[test]
fn banner_display_carries_dismiss_delay() {
    let config = ControllerConfig {
        error_style: ErrorStyle::Banner,
        banner_dismiss_ms: 5000,
        ..ControllerConfig::default()
    };
    let form = get_form("sperm_donor").unwrap();
    let host = MemoryHost::for_form(form.as_ref());
    let mut controller = FormController::attach_on(form, host, config, TODAY).unwrap();

    let outcome = controller.on_submit().unwrap();
    assert!(matches!(outcome, SubmitOutcome::Blocked(_)));
    assert_eq!(
        controller.host().banner_dismiss,
        Some(Duration::from_millis(5000))
    );
}

#[test]
fn validation_uses_current_date() {
    let mut host = couple_host();
    fill_required_couple(&mut host);
    host.set_value("male_dob", "2024-06-16");
    let mut controller = attach("commissioning_couple", host);

    let SubmitOutcome::Blocked(result) = controller.on_submit().unwrap() else {
        panic!("tomorrow's date should block submission");
    };
    assert_eq!(result.errors, vec!["Male Date of Birth cannot be in the future."]);

    controller.host_mut().set_value("male_dob", "2024-06-15");
    controller.on_change("male_dob");
    assert_eq!(controller.on_submit().unwrap(), SubmitOutcome::Submitted);
}
