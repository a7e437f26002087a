use std::collections::HashMap;

use intake_forms::forms::couple::CommissioningCouple;
use intake_forms::{get_form, IntakeForm};
use jiff::civil::{date, Date};

const TODAY: Date = date(2024, 6, 15);

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn valid_couple() -> HashMap<String, String> {
    values(&[
        ("female_name", "Lakshmi Rao"),
        ("male_name", "Suresh Rao"),
        ("female_aadhaar", "123456789012"),
        ("female_dob", "1990-04-12"),
        ("male_dob", "1987-11-02"),
        ("ivf_name", "Nelamangala Fertility Centre"),
        ("ivf_address", "B.H Road, Nelamangala"),
        ("doctor_name", "Dr. Ravikumar"),
    ])
}

#[test]
fn empty_form_reports_each_required_field_once() {
    let result = CommissioningCouple.validate(&HashMap::<String, String>::new(), TODAY);
    assert_eq!(
        result.errors,
        vec![
            "Female Name is required.",
            "Male Name is required.",
            "Female Aadhaar Number is required.",
            "Female Date of Birth is required.",
            "Male Date of Birth is required.",
            "IVF Name is required.",
            "IVF Address is required.",
            "Doctor Name is required.",
        ]
    );
}

#[test]
fn blank_fields_count_as_missing() {
    let mut v = valid_couple();
    v.insert("doctor_name".to_string(), "   ".to_string());
    let result = CommissioningCouple.validate(&v, TODAY);
    assert_eq!(result.errors, vec!["Doctor Name is required."]);
}

#[test]
fn valid_required_fields_only_pass() {
    let result = CommissioningCouple.validate(&valid_couple(), TODAY);
    assert!(result.is_valid(), "unexpected errors: {:?}", result.errors);
}

#[test]
fn aadhaar_must_be_exactly_twelve_digits() {
    for bad in ["12345678901", "1234567890123", "12345678901a", "1234 5678 9012"] {
        let mut v = valid_couple();
        v.insert("female_aadhaar".to_string(), bad.to_string());
        let result = CommissioningCouple.validate(&v, TODAY);
        assert_eq!(
            result.errors,
            vec!["Female Aadhaar Number must be 12 digits."],
            "input {bad:?}"
        );
    }
}

#[test]
fn adult_age_boundaries() {
    for (age, ok) in [("17", false), ("18", true), ("100", true), ("101", false), ("abc", false)] {
        let mut v = valid_couple();
        v.insert("female_age".to_string(), age.to_string());
        let result = CommissioningCouple.validate(&v, TODAY);
        assert_eq!(result.is_valid(), ok, "age {age}");
        if !ok {
            assert!(result.contains("Female Age must be between 18 and 100."));
        }
    }
}

#[test]
fn pin_code_must_be_six_digits() {
    let mut v = valid_couple();
    v.insert("pin_code".to_string(), "56001".to_string());
    let result = CommissioningCouple.validate(&v, TODAY);
    assert_eq!(result.errors, vec!["PIN Code must be 6 digits."]);
}

#[test]
fn birth_dates_cannot_be_in_the_future() {
    let mut v = valid_couple();
    v.insert("female_dob".to_string(), "2024-06-16".to_string());
    v.insert("male_dob".to_string(), "2024-06-15".to_string());
    let result = CommissioningCouple.validate(&v, TODAY);
    assert_eq!(
        result.errors,
        vec!["Female Date of Birth cannot be in the future."]
    );
}

#[test]
fn malformed_birth_date_is_reported() {
    let mut v = valid_couple();
    v.insert("male_dob".to_string(), "02/11/1987".to_string());
    let result = CommissioningCouple.validate(&v, TODAY);
    assert_eq!(
        result.errors,
        vec!["Male Date of Birth must be a valid date (YYYY-MM-DD)."]
    );
}

#[test]
fn registry_finds_couple_form() {
    let form = get_form("commissioning_couple").expect("registered");
    assert_eq!(form.dom_id(), "commissioningCoupleForm");
    assert!(form.dynamic_list().is_none());
    assert!(form.sections().is_empty());
    assert!(form.field("female_dob").is_some_and(|f| f.is_date()));
}
