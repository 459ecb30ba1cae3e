//! Strongly typed month index for override-table keys.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A month-of-year index, 1 through 12 inclusive.
///
/// Override tables are keyed by month; using a validated index at the
/// storage boundary removes the string/number ambiguity raw payloads carry.
///
/// # Example
///
/// ```
/// use report_engine::targets::Month;
///
/// let september = Month::new(9).unwrap();
/// assert_eq!(september.number(), 9);
/// assert!(Month::new(13).is_none());
/// assert!(Month::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month(u8);

impl Month {
    /// Creates a month from its 1-based number, rejecting anything outside
    /// 1 through 12.
    pub fn new(number: u8) -> Option<Month> {
        (1..=12).contains(&number).then_some(Month(number))
    }

    /// The month a date falls in.
    ///
    /// # Example
    ///
    /// ```
    /// use report_engine::targets::Month;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
    /// assert_eq!(Month::from_date(date), Month::new(9).unwrap());
    /// ```
    pub fn from_date(date: NaiveDate) -> Month {
        // chrono months are always 1-12
        Month(date.month() as u8)
    }

    /// The 1-based month number.
    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = u8::deserialize(deserializer)?;
        Month::new(number)
            .ok_or_else(|| D::Error::custom(format!("month out of range 1-12: {number}")))
    }
}
