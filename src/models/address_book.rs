//! The address book: records keyed by contact name.

use super::record::Record;
use chrono::{Duration, Local, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Length of the window used by [`AddressBook::get_upcoming_birthdays`].
pub const UPCOMING_BIRTHDAY_DAYS: i64 = 7;

/// Collection of contact records, one per name.
///
/// Entries are kept in insertion order of their name. Re-adding an existing
/// name replaces the record but keeps its position; deleting drops it.
///
/// The book assumes a single caller. Sharing it between threads requires one
/// external lock around the whole book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, silently replacing any existing record
    /// with the same name. Phones of the replaced record are not merged.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_some() {
            tracing::debug!(name = %key, "Replaced existing record");
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-match lookup by name for in-place edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`, if any. Missing names are a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            tracing::debug!(name = %name, "Deleted record");
        }
        removed
    }

    /// Records whose birthday falls within the next 7 days from now.
    ///
    /// See [`AddressBook::upcoming_birthdays_at`] for the exact rules.
    pub fn get_upcoming_birthdays(&self) -> Vec<&Record> {
        self.upcoming_birthdays_at(
            Local::now().naive_local(),
            Duration::days(UPCOMING_BIRTHDAY_DAYS),
        )
    }

    /// Records whose birthday lies in the inclusive window `[now, now + window]`.
    ///
    /// The birthday is compared as a date-time at midnight and its year is
    /// taken literally: it is not moved to this year's anniversary, so a
    /// birthday in the past only matches when `now` is within the window of
    /// that exact historical date. Results follow the book's reading order.
    ///
    /// If `now + window` is beyond the representable calendar the window has
    /// no upper bound.
    pub fn upcoming_birthdays_at(&self, now: NaiveDateTime, window: Duration) -> Vec<&Record> {
        let end = now.checked_add_signed(window).unwrap_or(NaiveDateTime::MAX);

        let upcoming: Vec<&Record> = self
            .records
            .values()
            .filter(|record| {
                record.birthday().is_some_and(|birthday| {
                    let at = birthday.at_midnight();
                    now <= at && at <= end
                })
            })
            .collect();

        tracing::trace!(
            scanned = self.records.len(),
            matched = upcoming.len(),
            "Upcoming birthday scan completed"
        );

        upcoming
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in reading order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

// Serde support - serialize as an array of records in reading order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - later records with a repeated name replace earlier ones
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
