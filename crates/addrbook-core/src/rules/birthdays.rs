use crate::domain::Birthday;
use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_UPCOMING_DAYS: i64 = 7;
pub const MAX_WINDOW_DAYS: i64 = 365;

/// Where a Feb 29 birthday lands in a year without Feb 29.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapDayPolicy {
    #[default]
    #[serde(rename = "february_28")]
    February28,
    #[serde(rename = "march_1")]
    March1,
    Skip,
}

impl LeapDayPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            LeapDayPolicy::February28 => "february_28",
            LeapDayPolicy::March1 => "march_1",
            LeapDayPolicy::Skip => "skip",
        }
    }
}

impl FromStr for LeapDayPolicy {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_ascii_lowercase();
        match value.as_str() {
            "february_28" | "feb28" | "feb-28" => Ok(LeapDayPolicy::February28),
            "march_1" | "mar1" | "mar-1" => Ok(LeapDayPolicy::March1),
            "skip" => Ok(LeapDayPolicy::Skip),
            _ => Err(CoreError::InvalidLeapDayPolicy(raw.to_string())),
        }
    }
}

/// Whether the window may run past Dec 31 into next year's occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearWrap {
    #[default]
    SameYear,
    NextYear,
}

impl FromStr for YearWrap {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_ascii_lowercase();
        match value.as_str() {
            "same_year" | "same-year" => Ok(YearWrap::SameYear),
            "next_year" | "next-year" => Ok(YearWrap::NextYear),
            _ => Err(CoreError::InvalidYearWrap(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpcomingPolicy {
    pub leap_day: LeapDayPolicy,
    pub year_wrap: YearWrap,
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The date a birthday is celebrated in `year`, or `None` when the policy skips it.
pub fn occurrence_in_year(
    birthday: &Birthday,
    year: i32,
    leap_day: LeapDayPolicy,
) -> Option<NaiveDate> {
    if let Some(date) = NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()) {
        return Some(date);
    }

    // Only Feb 29 can be missing from a year.
    match leap_day {
        LeapDayPolicy::February28 => NaiveDate::from_ymd_opt(year, 2, 28),
        LeapDayPolicy::March1 => NaiveDate::from_ymd_opt(year, 3, 1),
        LeapDayPolicy::Skip => None,
    }
}

/// Days from `reference` to the birthday's next counted occurrence.
///
/// With [`YearWrap::SameYear`] only the reference year is considered, so the result is
/// negative once the birthday has passed. With [`YearWrap::NextYear`] a passed birthday
/// is measured to next year's occurrence instead.
pub fn days_until_birthday(
    birthday: &Birthday,
    reference: NaiveDate,
    policy: &UpcomingPolicy,
) -> Option<(NaiveDate, i64)> {
    let year = reference.year();
    let this_year = occurrence_in_year(birthday, year, policy.leap_day)
        .map(|date| (date, (date - reference).num_days()));

    match policy.year_wrap {
        YearWrap::SameYear => this_year,
        YearWrap::NextYear => match this_year {
            Some(found) if found.1 >= 0 => Some(found),
            _ => occurrence_in_year(birthday, year + 1, policy.leap_day)
                .map(|date| (date, (date - reference).num_days()))
                .or(this_year),
        },
    }
}

pub fn within_window(delta_days: i64, days: i64) -> bool {
    (0..=days).contains(&delta_days)
}

#[cfg(test)]
mod tests {
    use super::{
        days_until_birthday, is_leap_year, occurrence_in_year, validate_window_days,
        LeapDayPolicy, UpcomingPolicy, YearWrap,
    };
    use crate::domain::Birthday;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn leap_year_logic() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn occurrence_keeps_month_and_day() {
        let birthday = Birthday::new("15.05.1990").unwrap();
        assert_eq!(
            occurrence_in_year(&birthday, 2024, LeapDayPolicy::default()),
            Some(date(2024, 5, 15))
        );
    }

    #[test]
    fn occurrence_leap_day_policies() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(
            occurrence_in_year(&birthday, 2024, LeapDayPolicy::Skip),
            Some(date(2024, 2, 29))
        );
        assert_eq!(
            occurrence_in_year(&birthday, 2023, LeapDayPolicy::February28),
            Some(date(2023, 2, 28))
        );
        assert_eq!(
            occurrence_in_year(&birthday, 2023, LeapDayPolicy::March1),
            Some(date(2023, 3, 1))
        );
        assert_eq!(occurrence_in_year(&birthday, 2023, LeapDayPolicy::Skip), None);
    }

    #[test]
    fn days_until_same_year_goes_negative() {
        let birthday = Birthday::new("02.01.1990").unwrap();
        let (_, delta) =
            days_until_birthday(&birthday, date(2024, 12, 30), &UpcomingPolicy::default())
                .unwrap();
        assert_eq!(delta, -363);
    }

    #[test]
    fn days_until_next_year_wraps() {
        let birthday = Birthday::new("02.01.1990").unwrap();
        let policy = UpcomingPolicy {
            year_wrap: YearWrap::NextYear,
            ..UpcomingPolicy::default()
        };
        let (when, delta) = days_until_birthday(&birthday, date(2024, 12, 30), &policy).unwrap();
        assert_eq!(when, date(2025, 1, 2));
        assert_eq!(delta, 3);
    }

    #[test]
    fn days_until_next_year_prefers_this_year() {
        let birthday = Birthday::new("31.12.1990").unwrap();
        let policy = UpcomingPolicy {
            year_wrap: YearWrap::NextYear,
            ..UpcomingPolicy::default()
        };
        let (when, delta) = days_until_birthday(&birthday, date(2024, 12, 30), &policy).unwrap();
        assert_eq!(when, date(2024, 12, 31));
        assert_eq!(delta, 1);
    }

    #[test]
    fn validate_window_days_bounds() {
        assert_eq!(validate_window_days(0), Ok(0));
        assert_eq!(validate_window_days(365), Ok(365));
        assert!(validate_window_days(-1).is_err());
        assert!(validate_window_days(366).is_err());
    }

    #[test]
    fn policy_labels_parse() {
        assert_eq!(
            LeapDayPolicy::from_str("March_1").unwrap(),
            LeapDayPolicy::March1
        );
        assert_eq!(LeapDayPolicy::from_str("skip").unwrap(), LeapDayPolicy::Skip);
        assert!(LeapDayPolicy::from_str("never").is_err());
        assert_eq!(YearWrap::from_str("next-year").unwrap(), YearWrap::NextYear);
        assert!(YearWrap::from_str("").is_err());
    }
}
