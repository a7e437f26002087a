use std::sync::LazyLock;

use intake_core::models::field::{FieldDescriptor, FieldKind};

use crate::forms::common::{
    aadhaar, adult_age, children_count_rule, contact_number, date, donor_contact_rules,
    donor_date_rules, field, lab_result_fields, lab_result_rules, marital_status, num_children,
    pin_code, text, text_area, yes_no, YES,
};
use crate::rules::{ConditionalSection, DynamicList, Rule};
use crate::IntakeForm;

/// Oocyte donor registration (Form 13 and the donor screening report).
/// Tobacco and alcohol details are revealed by their yes/no radios.
pub struct OocyteDonor;

impl IntakeForm for OocyteDonor {
    fn id(&self) -> &str {
        "oocyte_donor"
    }

    fn name(&self) -> &str {
        "Oocyte Donor Registration"
    }

    fn dom_id(&self) -> &str {
        "oocyteDonorForm"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: LazyLock<Vec<FieldDescriptor>> = LazyLock::new(|| {
            let mut fields = vec![
                text("full_name", "Full Name"),
                text_area("address", "Address"),
                text("district", "District"),
                text("state", "State"),
                pin_code(),
                contact_number(),
                aadhaar("aadhaar_number", "Aadhaar Number"),
                date("date_of_birth", "Date of Birth"),
                adult_age("age", "Age"),
                date("date_of_discussion", "Date of Discussion"),
                date("date_of_consultancy", "Date of Consultancy"),
                marital_status(),
                num_children(),
                text("donor_id", "Donor ID"),
                date("last_medical_exam", "Last Medical Exam"),
            ];
            fields.extend(lab_result_fields());
            fields.extend([
                text_area("family_history", "Family History"),
                text_area("serious_illness", "Serious Illness or Surgeries"),
                text_area("current_medications", "Current Medications"),
                text("allergies", "Allergies"),
                field("antral_follicle_count", "Antral Follicle Count", FieldKind::Number),
                field("fsh_levels", "FSH Levels", FieldKind::Number).with_help("mIU/mL"),
                field("amh_levels", "AMH Levels", FieldKind::Number).with_help("ng/mL"),
                yes_no("tobacco_use", "Tobacco Use"),
                text("tobacco_frequency", "Tobacco Frequency").in_section("tobacco_details"),
                yes_no("alcohol", "Alcohol Consumption"),
                text("alcohol_frequency", "Alcohol Frequency").in_section("alcohol_details"),
                yes_no("drug_use", "Recreational Drug Use"),
                text("exercise_routine", "Exercise Routine"),
                field("consent_registry", "National Registry Consent", FieldKind::Checkbox),
                text("place", "Place"),
                text("ivf_name", "IVF Name"),
                text_area("ivf_address", "IVF Address"),
                text("doctor_name", "Doctor Name"),
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
                Rule::required("ivf_name", "IVF Name"),
                Rule::required("doctor_name", "Doctor Name"),
            ];
            rules.extend(donor_contact_rules());
            rules.extend([
                Rule::int_range("age", 18, 100, "Age must be between 18 and 100."),
                children_count_rule(),
                Rule::required_if(
                    &["tobacco_frequency"],
                    "tobacco_use",
                    YES,
                    "Tobacco Frequency is required if tobacco use is Yes.",
                ),
                Rule::required_if(
                    &["alcohol_frequency"],
                    "alcohol",
                    YES,
                    "Alcohol Frequency is required if alcohol consumption is Yes.",
                ),
                Rule::non_negative("antral_follicle_count", "Antral Follicle Count"),
                Rule::non_negative("fsh_levels", "FSH Levels"),
                Rule::non_negative("amh_levels", "AMH Levels"),
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
                ConditionalSection::new("tobacco_details", "tobacco_use", YES),
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
