use std::io::Write;

use intake_check::{check_file, check_values, controller_config, FormSummary};
use intake_controller::config::ControllerConfig;
use intake_controller::state::FormState;
use intake_forms::forms::sperm_donor::SpermDonor;
use jiff::civil::{date, Date};
use serde_json::json;

const TODAY: Date = date(2024, 6, 15);

fn sperm_donor_submission() -> serde_json::Value {
    json!({
        "full_name": "Arjun Kumar",
        "aadhaar_number": "987654321098",
        "contact_number": "9876543210",
        "pin_code": "560001",
        "date_of_discussion": "2024-06-01",
        "date_of_consultancy": "2024-06-03",
        "email_address": "arjun@example.in",
        "height": "175 cm",
        "weight": "70 kg",
        "smoking": "No",
        "num_children": 2,
        "child_1_age": 6,
        "child_2_age": 3,
        "consent_registry": true
    })
}

#[test]
fn valid_submission_is_released() {
    let report = check_values(
        "sperm_donor",
        &sperm_donor_submission(),
        ControllerConfig::default(),
        TODAY,
    )
    .unwrap();

    assert!(report.submitted);
    assert_eq!(report.state, FormState::Submitting);
    assert!(report.errors.is_empty());
    assert!(report.ignored.is_empty());
    assert_eq!(report.progress.filled, 14);
    assert_eq!(report.progress.total, 46);
}

#[test]
fn invalid_submission_reports_messages_in_rule_order() {
    let mut values = sperm_donor_submission();
    values["aadhaar_number"] = json!("1234");
    values["smoking"] = json!("Yes");
    values["child_2_age"] = json!(101);

    let report =
        check_values("sperm_donor", &values, ControllerConfig::default(), TODAY).unwrap();

    assert!(!report.submitted);
    assert_eq!(report.state, FormState::ValidationFailed);
    assert_eq!(
        report.errors,
        vec![
            "Aadhaar Number must be 12 digits.",
            "Smoking Frequency and Cigarettes per Day are required if smoking is Yes.",
            "Child 2 Age must be between 0 and 100.",
        ]
    );
    assert!(report.render_text().starts_with("sperm_donor: blocked (3 errors)"));
}

#[test]
fn unknown_fields_are_ignored() {
    let mut values = sperm_donor_submission();
    values["csrf_token"] = json!("abc");

    let report =
        check_values("sperm_donor", &values, ControllerConfig::default(), TODAY).unwrap();
    assert!(report.submitted);
    assert_eq!(report.ignored, vec!["csrf_token"]);
}

#[test]
fn oversized_child_count_is_clamped_and_alerted() {
    let mut values = sperm_donor_submission();
    values["num_children"] = json!(25);

    let report =
        check_values("sperm_donor", &values, ControllerConfig::default(), TODAY).unwrap();
    assert_eq!(report.alerts, vec!["Number of children cannot exceed 20."]);
}

#[test]
fn unknown_form_is_an_error() {
    let err = check_values("egg_donor", &json!({}), ControllerConfig::default(), TODAY)
        .unwrap_err();
    assert!(err.to_string().contains("egg_donor"));
}

#[test]
fn non_object_submission_is_an_error() {
    assert!(check_values("sperm_donor", &json!([1, 2]), ControllerConfig::default(), TODAY).is_err());
}

#[test]
fn check_file_reads_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", sperm_donor_submission()).unwrap();

    let report = check_file("sperm_donor", file.path(), ControllerConfig::default(), TODAY).unwrap();
    assert!(report.submitted);
}

#[test]
fn check_file_rejects_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ full_name: ").unwrap();

    let err = check_file("sperm_donor", file.path(), ControllerConfig::default(), TODAY)
        .unwrap_err();
    assert!(err.to_string().contains("is not valid JSON"));
}

#[test]
fn missing_config_path_uses_defaults() {
    assert_eq!(controller_config(None).unwrap(), ControllerConfig::default());
}

#[test]
fn form_summary_serializes_structure() {
    let summary = serde_json::to_value(FormSummary::of(&SpermDonor)).unwrap();
    assert_eq!(summary["id"], "sperm_donor");
    assert_eq!(summary["dom_id"], "donorForm");
    assert_eq!(summary["dynamic_list"]["count_field"], "num_children");
    assert_eq!(summary["sections"].as_array().map(Vec::len), Some(2));
}
