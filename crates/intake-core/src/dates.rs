use jiff::civil::Date;

use crate::error::CoreError;

/// Length of the fixed-width `YYYY-MM-DD` form submitted by date inputs.
const ISO_DATE_LEN: usize = 10;

/// The current calendar date in the system time zone.
pub fn today() -> Date {
    jiff::Zoned::now().date()
}

/// Parse a date input value. Only the `YYYY-MM-DD` form a browser date
/// input submits is accepted.
pub fn parse_iso_date(value: &str) -> Result<Date, CoreError> {
    let trimmed = value.trim();
    if trimmed.len() != ISO_DATE_LEN {
        return Err(CoreError::InvalidDate {
            value: value.to_string(),
        });
    }
    trimmed.parse::<Date>().map_err(|_| CoreError::InvalidDate {
        value: value.to_string(),
    })
}

/// Whether `value` names a day strictly after `today`.
pub fn is_in_future(value: &str, today: Date) -> Result<bool, CoreError> {
    Ok(parse_iso_date(value)? > today)
}
