use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("phone number must be 10 digits: {0:?}")]
    InvalidPhone(String),
    #[error("invalid date format, use DD.MM.YYYY: {0:?}")]
    InvalidBirthdayFormat(String),
    #[error("date does not exist: {0:?}")]
    InvalidBirthdayDate(String),
    #[error("birthday already exists")]
    BirthdayExists,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid window days: {0}")]
    InvalidWindowDays(i64),
    #[error("invalid leap day policy: {0}")]
    InvalidLeapDayPolicy(String),
    #[error("invalid year wrap: {0}")]
    InvalidYearWrap(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
