use crate::error::invalid_input;
use addrbook_core::rules::{validate_window_days, LeapDayPolicy};
use addrbook_core::time::{local_today, parse_date};
use anyhow::Result;
use chrono::NaiveDate;
use std::str::FromStr;

pub fn parse_reference_date(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(value) => parse_date(value.trim()).map_err(|err| invalid_input(err.to_string())),
        None => Ok(local_today()),
    }
}

pub fn parse_window_days(days: i64) -> Result<i64> {
    validate_window_days(days).map_err(|err| invalid_input(err.to_string()))
}

pub fn parse_leap_day(raw: &str) -> Result<LeapDayPolicy> {
    LeapDayPolicy::from_str(raw)
        .map_err(|_| invalid_input("invalid leap day policy: expected february_28|march_1|skip"))
}

pub fn days_label(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "in 1 day".to_string(),
        n => format!("in {n} days"),
    }
}
