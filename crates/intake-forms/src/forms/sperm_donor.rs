use std::sync::LazyLock;

use intake_core::models::field::{FieldDescriptor, FieldKind};

use crate::forms::common::{
    aadhaar, children_count_rule, contact_number, date, donor_contact_rules, donor_date_rules,
    field, lab_result_fields, lab_result_rules, marital_status, num_children, pin_code, select,
    text, text_area, yes_no, YES,
};
use crate::rules::{ConditionalSection, DynamicList, Rule, EMAIL, HEIGHT, WEIGHT};
use crate::IntakeForm;

/// Sperm donor registration (Form 15, the medical history report and the
/// donor information form). Smoking and alcohol details are revealed by
/// their yes/no radios; each needs two detail fields when shown.
pub struct SpermDonor;

impl IntakeForm for SpermDonor {
    fn id(&self) -> &str {
        "sperm_donor"
    }

    fn name(&self) -> &str {
        "Sperm Donor Registration"
    }

    fn dom_id(&self) -> &str {
        "donorForm"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: LazyLock<Vec<FieldDescriptor>> = LazyLock::new(|| {
            let mut fields = vec![
                text("full_name", "Full Name"),
                text_area("address", "Address"),
                pin_code(),
                contact_number(),
                aadhaar("aadhaar_number", "Aadhaar Number"),
                date("date_of_birth", "Date of Birth"),
                field("email_address", "Email Address", FieldKind::Email),
                text("donor_id", "Donor ID"),
                date("date_of_discussion", "Date of Discussion"),
                date("date_of_consultancy", "Date of Consultancy"),
                text_area("genetic_disorders", "Known Genetic Disorders"),
                text_area("family_history", "Family History"),
                text_area("current_medications", "Current Medications"),
                text("allergies", "Allergies"),
                date("last_medical_exam", "Last Medical Exam"),
            ];
            fields.extend(lab_result_fields());
            fields.extend([
                text_area("serious_illness", "Serious Illness or Surgeries"),
                yes_no("smoking", "Smoking"),
                text("smoking_frequency", "Smoking Frequency").in_section("smoking_details"),
                field("cigarettes_per_day", "Cigarettes per Day", FieldKind::Number)
                    .in_section("smoking_details"),
                yes_no("alcohol", "Alcohol Consumption"),
                text("alcohol_frequency", "Alcohol Frequency").in_section("alcohol_details"),
                text("alcohol_amount", "Alcohol Amount").in_section("alcohol_details"),
                yes_no("drug_use", "Recreational Drug Use"),
                select(
                    "diet",
                    "Dietary Preferences",
                    &["Not Specified", "Vegetarian", "Non-Vegetarian", "Vegan"],
                ),
                marital_status(),
                num_children(),
                yes_no("donor_experience", "Previous Donor Experience"),
                text("donation_frequency", "Donation Frequency"),
                text("height", "Height").with_help("e.g. 175 cm or 5.9 ft"),
                text("weight", "Weight").with_help("e.g. 70 kg or 154 lbs"),
                text("education", "Educational Qualifications"),
                text("mother_tongue", "Mother Tongue"),
                text("skin_colour", "Skin Colour"),
                text("hair_colour", "Hair Colour"),
                text("eye_colour", "Eye Colour"),
                text("religion", "Religion"),
                text("occupation", "Occupation"),
                field(
                    "consent_cryopreservation",
                    "Cryopreservation Consent",
                    FieldKind::Checkbox,
                ),
                field("consent_art_bank", "ART Bank Use Consent", FieldKind::Checkbox),
                field("consent_registry", "National Registry Consent", FieldKind::Checkbox),
            ]);
            fields
        });
        &FIELDS
    }

    fn rules(&self) -> &[Rule] {
        static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
            let mut rules = vec![
                Rule::required("full_name", "Full Name"),
                Rule::required("aadhaar_number", "Aadhaar Number"),
                Rule::required("date_of_discussion", "Date of Discussion"),
                Rule::required("date_of_consultancy", "Date of Consultancy"),
            ];
            rules.extend(donor_contact_rules());
            rules.extend([
                Rule::matches("email_address", &EMAIL, "Invalid email address."),
                Rule::matches(
                    "height",
                    &HEIGHT,
                    "Height must be in format \"number cm\" or \"number ft\".",
                ),
                Rule::matches(
                    "weight",
                    &WEIGHT,
                    "Weight must be in format \"number kg\" or \"number lbs\".",
                ),
                children_count_rule(),
                Rule::required_if(
                    &["smoking_frequency", "cigarettes_per_day"],
                    "smoking",
                    YES,
                    "Smoking Frequency and Cigarettes per Day are required if smoking is Yes.",
                ),
                Rule::required_if(
                    &["alcohol_frequency", "alcohol_amount"],
                    "alcohol",
                    YES,
                    "Alcohol Frequency and Amount are required if alcohol consumption is Yes.",
                ),
            ]);
            rules.extend(donor_date_rules());
            rules.extend(lab_result_rules());
            rules
        });
        &RULES
    }

    fn sections(&self) -> &[ConditionalSection] {
        static SECTIONS: LazyLock<Vec<ConditionalSection>> = LazyLock::new(|| {
            vec![
                ConditionalSection::new("smoking_details", "smoking", YES),
                ConditionalSection::new("alcohol_details", "alcohol", YES),
            ]
        });
        &SECTIONS
    }

    fn dynamic_list(&self) -> Option<&DynamicList> {
        static CHILDREN: LazyLock<DynamicList> = LazyLock::new(DynamicList::children_ages);
        Some(&CHILDREN)
    }
}
