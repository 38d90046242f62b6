use crate::domain::field::Field;
use crate::error::ValidationError;
use std::fmt;

pub const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !is_valid_phone(raw) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_phone(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == PHONE_DIGITS && bytes.iter().all(u8::is_ascii_digit)
}

impl Field for PhoneNumber {
    type Value = str;

    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
