//! Field and rule groups shared by more than one form.

use intake_core::models::field::{FieldDescriptor, FieldKind};

use crate::rules::Rule;

/// The option of a yes/no radio group that reveals its detail section.
pub const YES: &str = "Yes";

pub const LAB_RESULT_OPTIONS: [&str; 3] = ["Negative", "Positive", "Pending"];

const LAB_RESULTS: [(&str, &str); 4] = [
    ("hiv_results", "HIV Results"),
    ("hbv_results", "HBV Results"),
    ("hcv_results", "HCV Results"),
    ("vdrl_results", "VDRL Results"),
];

/// Donor date fields that must not lie in the future.
const DONOR_DATES: [(&str, &str); 4] = [
    ("date_of_birth", "Date of Birth"),
    ("last_medical_exam", "Last Medical Exam"),
    ("date_of_discussion", "Date of Discussion"),
    ("date_of_consultancy", "Date of Consultancy"),
];

pub fn field(name: &str, label: &str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor::new(name, label, kind)
}

pub fn text(name: &str, label: &str) -> FieldDescriptor {
    field(name, label, FieldKind::Text)
}

pub fn text_area(name: &str, label: &str) -> FieldDescriptor {
    field(name, label, FieldKind::TextArea)
}

pub fn date(name: &str, label: &str) -> FieldDescriptor {
    field(name, label, FieldKind::Date)
}

pub fn yes_no(name: &str, label: &str) -> FieldDescriptor {
    field(
        name,
        label,
        FieldKind::Radio {
            options: vec![YES.to_string(), "No".to_string()],
        },
    )
}

pub fn select(name: &str, label: &str, options: &[&str]) -> FieldDescriptor {
    field(
        name,
        label,
        FieldKind::Select {
            options: options.iter().map(|o| o.to_string()).collect(),
        },
    )
}

pub fn aadhaar(name: &str, label: &str) -> FieldDescriptor {
    field(name, label, FieldKind::Tel).with_help("12-digit Aadhaar number")
}

pub fn pin_code() -> FieldDescriptor {
    field("pin_code", "PIN Code", FieldKind::Tel).with_help("6-digit PIN code")
}

pub fn contact_number() -> FieldDescriptor {
    field("contact_number", "Contact Number", FieldKind::Tel).with_help("10-digit mobile number")
}

pub fn adult_age(name: &str, label: &str) -> FieldDescriptor {
    field(name, label, FieldKind::Number).with_help("Age must be between 18 and 100")
}

pub fn marital_status() -> FieldDescriptor {
    select(
        "marital_status",
        "Marital Status",
        &["Not Specified", "Single", "Married", "Divorced", "Widowed"],
    )
}

pub fn num_children() -> FieldDescriptor {
    field("num_children", "Number of Children", FieldKind::Number)
        .with_help("Between 0 and 20")
}

pub fn lab_result_fields() -> Vec<FieldDescriptor> {
    LAB_RESULTS
        .iter()
        .map(|(name, label)| select(name, label, &LAB_RESULT_OPTIONS))
        .collect()
}

pub fn lab_result_rules() -> Vec<Rule> {
    LAB_RESULTS
        .iter()
        .map(|(name, label)| {
            Rule::one_of(
                name,
                &LAB_RESULT_OPTIONS,
                &format!("{label} must be 'Negative', 'Positive', or 'Pending'."),
            )
        })
        .collect()
}

pub fn donor_date_rules() -> Vec<Rule> {
    DONOR_DATES
        .iter()
        .map(|(name, label)| Rule::not_in_future(name, label))
        .collect()
}

/// Digit-count checks on the donor identity and contact fields.
pub fn donor_contact_rules() -> Vec<Rule> {
    vec![
        Rule::digits("aadhaar_number", 12, "Aadhaar Number must be 12 digits."),
        Rule::digits("contact_number", 10, "Contact Number must be 10 digits."),
        Rule::digits("pin_code", 6, "PIN Code must be 6 digits."),
    ]
}

pub fn children_count_rule() -> Rule {
    Rule::int_range(
        "num_children",
        0,
        20,
        "Number of children must be between 0 and 20.",
    )
}
