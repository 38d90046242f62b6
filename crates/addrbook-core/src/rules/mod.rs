pub mod birthdays;

pub use birthdays::{
    days_until_birthday, is_leap_year, occurrence_in_year, validate_window_days, within_window,
    LeapDayPolicy, UpcomingPolicy, YearWrap, DEFAULT_UPCOMING_DAYS, MAX_WINDOW_DAYS,
};
