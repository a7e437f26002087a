use std::sync::LazyLock;

use intake_core::dates;
use intake_core::models::field::{FieldDescriptor, FieldKind};
use intake_core::models::validation::ValidationResult;
use intake_core::values::FieldValues;
use jiff::civil::Date;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// General shape of an email address.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z0-9_]+$").expect("valid email pattern")
});

/// A height such as `175 cm` or `5.9 ft`.
pub static HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)? (cm|ft)$").expect("valid height pattern")
});

/// A weight such as `62 kg` or `136.5 lbs`.
pub static WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)? (kg|lbs)$").expect("valid weight pattern")
});

/// When a rule applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveIf {
    Always,
    /// Only while `field` currently holds `value`, e.g. a yes/no radio set to "Yes".
    Equals { field: String, value: String },
}

impl ActiveIf {
    pub fn is_active(&self, values: &dyn FieldValues) -> bool {
        match self {
            ActiveIf::Always => true,
            ActiveIf::Equals { field, value } => {
                values.filled(field).as_deref() == Some(value.as_str())
            }
        }
    }
}

/// The predicate a rule applies to each of its fields.
///
/// Every check except `Required` passes on an empty value.
#[derive(Debug, Clone)]
pub enum Check {
    Required,
    /// Exactly this many ASCII digits.
    Digits(usize),
    /// An integer within `[min, max]`. Non-integers fail.
    IntRange { min: i64, max: i64 },
    NonNegativeNumber,
    /// A `YYYY-MM-DD` date no later than today. Unparseable dates report
    /// `malformed` instead of the rule's message.
    NotInFuture { malformed: String },
    /// One of a closed set of labels.
    OneOf(Vec<String>),
    Matches(Regex),
}

enum Outcome {
    Pass,
    Fail,
    Malformed,
}

impl Check {
    fn apply(&self, value: &str, today: Date) -> Outcome {
        let ok = match self {
            Check::Required => true,
            Check::Digits(n) => value.len() == *n && value.bytes().all(|b| b.is_ascii_digit()),
            Check::IntRange { min, max } => value
                .parse::<i64>()
                .is_ok_and(|v| (*min..=*max).contains(&v)),
            Check::NonNegativeNumber => value
                .parse::<f64>()
                .is_ok_and(|v| v.is_finite() && v >= 0.0),
            Check::NotInFuture { .. } => match dates::is_in_future(value, today) {
                Ok(future) => !future,
                Err(_) => return Outcome::Malformed,
            },
            Check::OneOf(options) => options.iter().any(|o| o == value),
            Check::Matches(pattern) => pattern.is_match(value),
        };
        if ok { Outcome::Pass } else { Outcome::Fail }
    }
}

/// One validation rule: a check over one or more fields, the message shown
/// when it fails, and the condition under which it applies.
#[derive(Debug, Clone)]
pub struct Rule {
    pub fields: Vec<String>,
    pub check: Check,
    pub message: String,
    pub active_if: ActiveIf,
}

impl Rule {
    fn new(fields: &[&str], check: Check, message: String) -> Self {
        Self {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            check,
            message,
            active_if: ActiveIf::Always,
        }
    }

    pub fn required(field: &str, label: &str) -> Self {
        Self::new(&[field], Check::Required, format!("{label} is required."))
    }

    /// All of `fields` must be filled while `governing` holds `value`.
    pub fn required_if(fields: &[&str], governing: &str, value: &str, message: &str) -> Self {
        Self::new(fields, Check::Required, message.to_string()).when(governing, value)
    }

    pub fn digits(field: &str, count: usize, message: &str) -> Self {
        Self::new(&[field], Check::Digits(count), message.to_string())
    }

    pub fn int_range(field: &str, min: i64, max: i64, message: &str) -> Self {
        Self::new(&[field], Check::IntRange { min, max }, message.to_string())
    }

    pub fn non_negative(field: &str, label: &str) -> Self {
        Self::new(
            &[field],
            Check::NonNegativeNumber,
            format!("{label} must be a non-negative number."),
        )
    }

    pub fn not_in_future(field: &str, label: &str) -> Self {
        Self::new(
            &[field],
            Check::NotInFuture {
                malformed: format!("{label} must be a valid date (YYYY-MM-DD)."),
            },
            format!("{label} cannot be in the future."),
        )
    }

    pub fn one_of(field: &str, options: &[&str], message: &str) -> Self {
        Self::new(
            &[field],
            Check::OneOf(options.iter().map(|o| o.to_string()).collect()),
            message.to_string(),
        )
    }

    pub fn matches(field: &str, pattern: &Regex, message: &str) -> Self {
        Self::new(&[field], Check::Matches(pattern.clone()), message.to_string())
    }

    pub fn when(mut self, field: &str, value: &str) -> Self {
        self.active_if = ActiveIf::Equals {
            field: field.to_string(),
            value: value.to_string(),
        };
        self
    }

    /// Evaluate against current values. Returns the message to show, if the
    /// rule is active and fails. Absent fields read as empty.
    pub fn evaluate(&self, values: &dyn FieldValues, today: Date) -> Option<String> {
        if !self.active_if.is_active(values) {
            return None;
        }

        if let Check::Required = self.check {
            let missing = self.fields.iter().any(|f| !values.is_filled(f));
            return missing.then(|| self.message.clone());
        }

        for field in &self.fields {
            let Some(value) = values.filled(field) else {
                continue;
            };
            match self.check.apply(&value, today) {
                Outcome::Pass => {}
                Outcome::Fail => return Some(self.message.clone()),
                Outcome::Malformed => {
                    let message = match &self.check {
                        Check::NotInFuture { malformed } => malformed,
                        _ => &self.message,
                    };
                    return Some(message.clone());
                }
            }
        }
        None
    }
}

/// A group of fields shown only while a governing choice field holds a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionalSection {
    /// Region id of the section in the markup.
    pub id: String,
    pub governing_field: String,
    pub show_when: String,
}

impl ConditionalSection {
    pub fn new(id: &str, governing_field: &str, show_when: &str) -> Self {
        Self {
            id: id.to_string(),
            governing_field: governing_field.to_string(),
            show_when: show_when.to_string(),
        }
    }

    pub fn is_visible(&self, values: &dyn FieldValues) -> bool {
        values.filled(&self.governing_field).as_deref() == Some(self.show_when.as_str())
    }
}

/// A bounded list of generated inputs whose length is driven by a count field.
/// Items are named `{prefix}{i}{suffix}` with `i` starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DynamicList {
    pub count_field: String,
    /// Label of the count field, used in the bound-exceeded alert.
    pub count_label: String,
    /// Region id the generated inputs are rendered into.
    pub container: String,
    pub prefix: String,
    pub suffix: String,
    /// Item label, with `{i}` replaced by the 1-based index.
    pub label: String,
    pub max_items: usize,
    pub item_min: i64,
    pub item_max: i64,
}

impl DynamicList {
    /// The children-age list shared by the donor forms.
    pub fn children_ages() -> Self {
        Self {
            count_field: "num_children".to_string(),
            count_label: "Number of children".to_string(),
            container: "children_ages".to_string(),
            prefix: "child_".to_string(),
            suffix: "_age".to_string(),
            label: "Child {i} Age".to_string(),
            max_items: 20,
            item_min: 0,
            item_max: 100,
        }
    }

    pub fn item_name(&self, index: usize) -> String {
        format!("{}{index}{}", self.prefix, self.suffix)
    }

    pub fn item_label(&self, index: usize) -> String {
        self.label.replace("{i}", &index.to_string())
    }

    pub fn item_help(&self) -> String {
        format!("Age must be between {} and {}", self.item_min, self.item_max)
    }

    pub fn item_descriptor(&self, index: usize) -> FieldDescriptor {
        FieldDescriptor::new(&self.item_name(index), &self.item_label(index), FieldKind::Number)
            .with_help(&self.item_help())
    }

    /// The 1-based index encoded in `name`, if it names an item of this list.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let index = name
            .strip_prefix(&self.prefix)?
            .strip_suffix(&self.suffix)?
            .parse::<usize>()
            .ok()?;
        (1..=self.max_items).contains(&index).then_some(index)
    }

    /// The count the user asked for, read from the leading integer of the
    /// value (`"2.5"` reads as 2, `"21.5"` as 21). Empty, non-numeric and
    /// negative values read as zero. A digit run too long for `usize`
    /// saturates, so it still reads as above `max_items`.
    pub fn requested_count(&self, values: &dyn FieldValues) -> usize {
        let Some(value) = values.filled(&self.count_field) else {
            return 0;
        };
        let (negative, unsigned) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value.strip_prefix('+').unwrap_or(&value)),
        };
        let len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
        let digits = &unsigned[..len];
        if negative || digits.is_empty() {
            return 0;
        }
        // only overflow can fail on a non-empty digit run
        digits.parse::<usize>().unwrap_or(usize::MAX)
    }

    pub fn bound_message(&self) -> String {
        format!("{} cannot exceed {}.", self.count_label, self.max_items)
    }

    pub fn item_range_message(&self, index: usize) -> String {
        format!(
            "{} must be between {} and {}.",
            self.item_label(index),
            self.item_min,
            self.item_max
        )
    }

    /// Range-check every rendered, filled item up to the requested count.
    pub fn validate_items(&self, values: &dyn FieldValues, result: &mut ValidationResult) {
        let count = self.requested_count(values).min(self.max_items);
        for index in 1..=count {
            let Some(value) = values.filled(&self.item_name(index)) else {
                continue;
            };
            let in_range = value
                .parse::<i64>()
                .is_ok_and(|v| (self.item_min..=self.item_max).contains(&v));
            if !in_range {
                result.push(self.item_range_message(index));
            }
        }
    }
}
