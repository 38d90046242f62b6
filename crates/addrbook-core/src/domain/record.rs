use crate::domain::birthday::Birthday;
use crate::domain::name::Name;
use crate::domain::phone::PhoneNumber;
use crate::error::ValidationError;
use std::fmt;

const MISSING_BIRTHDAY: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Removes every entry equal to `phone`. Missing numbers are not an error.
    pub fn remove_phone(&mut self, phone: &str) {
        self.take_phone(phone);
    }

    /// Replaces `old` with `new`, keeping the position of the first `old` entry.
    ///
    /// Not atomic: every `old` entry is removed before `new` is validated, so an invalid
    /// `new` leaves the record without `old`. See [`Record::edit_phone_strict`].
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let slot = self.take_phone(old);
        let phone = PhoneNumber::new(new)?;
        self.put_phone(slot, phone);
        Ok(())
    }

    /// Same as [`Record::edit_phone`], but the phone list is untouched when `new` is invalid.
    pub fn edit_phone_strict(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(new)?;
        let slot = self.take_phone(old);
        self.put_phone(slot, phone);
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|entry| entry.as_str() == phone)
    }

    /// A birthday can only be set once; the duplicate check runs before parsing.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        if self.birthday.is_some() {
            return Err(ValidationError::BirthdayExists);
        }
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    fn take_phone(&mut self, phone: &str) -> Option<usize> {
        let first = self.phones.iter().position(|entry| entry.as_str() == phone);
        if first.is_some() {
            self.phones.retain(|entry| entry.as_str() != phone);
        }
        first
    }

    fn put_phone(&mut self, slot: Option<usize>, phone: PhoneNumber) {
        match slot {
            Some(idx) => self.phones.insert(idx, phone),
            None => self.phones.push(phone),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{birthday}"),
            None => f.write_str(MISSING_BIRTHDAY),
        }
    }
}
