use crate::domain::{Record, UpcomingBirthday};
use crate::error::ValidationError;
use crate::time::format_date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDto {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthdayDto {
    pub name: String,
    pub birthday: String,
    pub date: String,
    pub days_until: i64,
}

impl From<&Record> for RecordDto {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record
                .phones()
                .iter()
                .map(|phone| phone.as_str().to_string())
                .collect(),
            birthday: record.birthday().map(ToString::to_string),
        }
    }
}

impl TryFrom<RecordDto> for Record {
    type Error = ValidationError;

    fn try_from(dto: RecordDto) -> Result<Self, Self::Error> {
        let mut record = Record::new(&dto.name)?;
        for phone in &dto.phones {
            record.add_phone(phone)?;
        }
        if let Some(birthday) = dto.birthday.as_deref() {
            record.add_birthday(birthday)?;
        }
        Ok(record)
    }
}

impl From<&UpcomingBirthday<'_>> for UpcomingBirthdayDto {
    fn from(item: &UpcomingBirthday<'_>) -> Self {
        Self {
            name: item.record.name().as_str().to_string(),
            birthday: item
                .record
                .birthday()
                .map(ToString::to_string)
                .unwrap_or_default(),
            date: format_date(item.date),
            days_until: item.days_until,
        }
    }
}
