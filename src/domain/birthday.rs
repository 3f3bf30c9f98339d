//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Input and display format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").expect("Failed to compile birthday regex")
});

/// A birthday parsed from `DD.MM.YYYY`.
///
/// Only the calendar date is kept; the raw input string is dropped after
/// parsing and rendering always re-formats the date.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("10.04.1990").unwrap();
/// assert_eq!(birthday.to_string(), "10.04.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// Day and month take one or two digits, the year exactly four, and
    /// together they must name a real calendar date in years 1 to 9999
    /// (`29.02.2023` and `01.01.0000` are rejected). `1.4.1990` is read as
    /// 1 April 1990 and renders as `01.04.1990`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input does not parse.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        if !BIRTHDAY_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        match NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT) {
            Ok(date) if date.year() >= 1 => Ok(Self(date)),
            _ => Err(ValidationError::InvalidBirthday(raw.to_string())),
        }
    }

    /// The calendar date of the birthday.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday as a date-time at midnight.
    pub fn at_midnight(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }
}

impl Field for Birthday {
    const KIND: &'static str = "birthday";
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as DD.MM.YYYY
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from DD.MM.YYYY with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
