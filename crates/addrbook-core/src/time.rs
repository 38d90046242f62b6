use chrono::{Local, NaiveDate};

use crate::error::ValidationError;

pub const DATE_FORMAT: &str = "%d.%m.%Y";
const DATE_LEN: usize = 10;

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a strict `DD.MM.YYYY` date.
///
/// Single-digit days or months, other separators and surrounding whitespace are rejected,
/// as are dates that do not exist on the calendar (`30.02.2020`).
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let format_err = || ValidationError::InvalidBirthdayFormat(input.to_string());

    let bytes = input.as_bytes();
    if bytes.len() != DATE_LEN {
        return Err(format_err());
    }
    for (idx, byte) in bytes.iter().enumerate() {
        let ok = match idx {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        };
        if !ok {
            return Err(format_err());
        }
    }

    let day: u32 = input[0..2].parse().map_err(|_| format_err())?;
    let month: u32 = input[3..5].parse().map_err(|_| format_err())?;
    let year: i32 = input[6..10].parse().map_err(|_| format_err())?;
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(format_err());
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ValidationError::InvalidBirthdayDate(input.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
