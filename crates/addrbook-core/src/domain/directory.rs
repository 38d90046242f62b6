use crate::domain::record::Record;
use crate::rules::birthdays::{days_until_birthday, within_window, UpcomingPolicy};
use chrono::NaiveDate;
use tracing::{debug, trace};

/// Records keyed by name, iterated in insertion order.
///
/// Overwriting a name keeps its earlier position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: Vec<Record>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingBirthday<'a> {
    pub record: &'a Record,
    pub date: NaiveDate,
    pub days_until: i64,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(idx) => {
                debug!(name = record.name().as_str(), "overwriting record");
                self.records[idx] = record;
            }
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|idx| &self.records[idx])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(|idx| &mut self.records[idx])
    }

    /// Removes `name` if present. Deleting a missing name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|idx| self.records.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name().as_str())
    }

    /// Records whose birthday falls within `days` of `reference`, both ends inclusive.
    ///
    /// Uses the default policy: the reference year only, Feb 29 on Feb 28 in common years.
    pub fn upcoming_birthdays(&self, days: i64, reference: NaiveDate) -> Vec<&Record> {
        self.upcoming_birthdays_with(days, reference, &UpcomingPolicy::default())
    }

    pub fn upcoming_birthdays_with(
        &self,
        days: i64,
        reference: NaiveDate,
        policy: &UpcomingPolicy,
    ) -> Vec<&Record> {
        self.upcoming(days, reference, policy)
            .into_iter()
            .map(|item| item.record)
            .collect()
    }

    /// Like [`Directory::upcoming_birthdays_with`], with the celebration date attached.
    pub fn upcoming(
        &self,
        days: i64,
        reference: NaiveDate,
        policy: &UpcomingPolicy,
    ) -> Vec<UpcomingBirthday<'_>> {
        let mut out = Vec::new();
        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let Some((date, days_until)) = days_until_birthday(birthday, reference, policy) else {
                trace!(name = record.name().as_str(), "leap day birthday skipped");
                continue;
            };
            if within_window(days_until, days) {
                out.push(UpcomingBirthday {
                    record,
                    date,
                    days_until,
                });
            }
        }
        out
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for Directory {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for record in iter {
            directory.add_record(record);
        }
        directory
    }
}
