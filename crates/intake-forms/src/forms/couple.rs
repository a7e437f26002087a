use std::sync::LazyLock;

use intake_core::models::field::FieldDescriptor;

use crate::forms::common::{aadhaar, adult_age, date, pin_code, text, text_area};
use crate::rules::Rule;
use crate::IntakeForm;

/// Commissioning couple registration: both partners, the couple's address
/// and the treating IVF centre. No conditional sections or dynamic lists.
pub struct CommissioningCouple;

impl IntakeForm for CommissioningCouple {
    fn id(&self) -> &str {
        "commissioning_couple"
    }

    fn name(&self) -> &str {
        "Commissioning Couple Registration"
    }

    fn dom_id(&self) -> &str {
        "commissioningCoupleForm"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: LazyLock<Vec<FieldDescriptor>> = LazyLock::new(|| {
            vec![
                text("female_name", "Female Name"),
                adult_age("female_age", "Female Age"),
                date("female_dob", "Female Date of Birth"),
                aadhaar("female_aadhaar", "Female Aadhaar Number"),
                text("female_occupation", "Female Occupation"),
                text("male_name", "Male Name"),
                adult_age("male_age", "Male Age"),
                date("male_dob", "Male Date of Birth"),
                text_area("address", "Address"),
                text("district", "District"),
                text("state", "State"),
                pin_code(),
                text("place", "Place"),
                text("ivf_name", "IVF Name"),
                text_area("ivf_address", "IVF Address"),
                text("doctor_name", "Doctor Name"),
            ]
        });
        &FIELDS
    }

    fn rules(&self) -> &[Rule] {
        static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
            vec![
                Rule::required("female_name", "Female Name"),
                Rule::required("male_name", "Male Name"),
                Rule::required("female_aadhaar", "Female Aadhaar Number"),
                Rule::required("female_dob", "Female Date of Birth"),
                Rule::required("male_dob", "Male Date of Birth"),
                Rule::required("ivf_name", "IVF Name"),
                Rule::required("ivf_address", "IVF Address"),
                Rule::required("doctor_name", "Doctor Name"),
                Rule::digits(
                    "female_aadhaar",
                    12,
                    "Female Aadhaar Number must be 12 digits.",
                ),
                Rule::digits("pin_code", 6, "PIN Code must be 6 digits."),
                Rule::int_range("female_age", 18, 100, "Female Age must be between 18 and 100."),
                Rule::int_range("male_age", 18, 100, "Male Age must be between 18 and 100."),
                Rule::not_in_future("female_dob", "Female Date of Birth"),
                Rule::not_in_future("male_dob", "Male Date of Birth"),
            ]
        });
        &RULES
    }
}
