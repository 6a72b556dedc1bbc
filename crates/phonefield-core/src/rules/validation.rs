use crate::domain::{is_complete_nanp, national_digits};
use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};

/// Accepts a complete NANP number and returns it as `+1AAABBBCCCC`.
pub fn validate_phone(value: &str) -> Result<String, CoreError> {
    if !is_complete_nanp(value) {
        return Err(CoreError::InvalidPhone);
    }
    Ok(format!("+1{}", national_digits(value)))
}

/// Parses `M/D/YYYY` (one or two digit month and day). The date must exist
/// on the calendar; `2/30/2020` is rejected.
pub fn parse_us_date(value: &str) -> Result<NaiveDate, CoreError> {
    let mut parts = value.split('/');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(CoreError::InvalidDate);
    };

    let month = parse_part(month, 1..=2)?;
    let day = parse_part(day, 1..=2)?;
    let year = parse_part(year, 4..=4)?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(CoreError::InvalidDate)
}

pub fn format_us_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year())
}

fn parse_part(raw: &str, width: std::ops::RangeInclusive<usize>) -> Result<u32, CoreError> {
    if !width.contains(&raw.len()) || !raw.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(CoreError::InvalidDate);
    }
    raw.parse().map_err(|_| CoreError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::{format_us_date, parse_us_date, validate_phone};
    use crate::error::CoreError;
    use chrono::NaiveDate;

    #[test]
    fn validate_phone_returns_e164() {
        assert_eq!(validate_phone("5551234567").unwrap(), "+15551234567");
        assert_eq!(validate_phone("+15551234567").unwrap(), "+15551234567");
    }

    #[test]
    fn validate_phone_rejects_partial_numbers() {
        assert_eq!(validate_phone("555123"), Err(CoreError::InvalidPhone));
        assert_eq!(validate_phone(""), Err(CoreError::InvalidPhone));
    }

    #[test]
    fn parse_us_date_accepts_short_and_padded_forms() {
        let expected = NaiveDate::from_ymd_opt(1990, 7, 4).unwrap();
        assert_eq!(parse_us_date("7/4/1990").unwrap(), expected);
        assert_eq!(parse_us_date("07/04/1990").unwrap(), expected);
    }

    #[test]
    fn parse_us_date_rejects_bad_shapes() {
        for value in ["", "7/4/90", "2024-01-01", "1/1/2024/1", "007/04/1990", " 7/4/1990"] {
            assert_eq!(parse_us_date(value), Err(CoreError::InvalidDate), "{value}");
        }
    }

    #[test]
    fn parse_us_date_rejects_impossible_dates() {
        assert!(parse_us_date("2/30/2020").is_err());
        assert!(parse_us_date("13/1/2020").is_err());
        assert!(parse_us_date("2/29/2024").is_ok());
    }

    #[test]
    fn format_us_date_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(1990, 7, 4).unwrap();
        assert_eq!(format_us_date(date), "07/04/1990");
    }
}
