//! The `dd/MM/yyyy` date format used by every date field on the wire.
//!
//! Parsing is strict: impossible calendar dates such as `31/02/2020` are rejected
//! rather than rolled over into the next month, and trailing input is an error.

use chrono::NaiveDate;
use thiserror::Error;

/// chrono format string for `dd/MM/yyyy`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Byte offsets of the two separators in `dd/MM/yyyy`.
const SEPARATORS: [usize; 2] = [2, 5];
const DATE_LENGTH: usize = 10;

#[derive(Error, Debug)]
pub enum DateError {
    /// Input is not exactly two digits, slash, two digits, slash, four digits.
    #[error("date must be in format dd/MM/yyyy")]
    Shape,

    /// Input has the right shape but is not a calendar date.
    #[error(transparent)]
    Calendar(#[from] chrono::ParseError),
}

/// Parses a `dd/MM/yyyy` string into a calendar date.
///
/// chrono alone tolerates padding and signed years, so the shape is checked first.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == DATE_LENGTH
        && bytes.iter().enumerate().all(|(i, b)| {
            if SEPARATORS.contains(&i) {
                *b == b'/'
            } else {
                b.is_ascii_digit()
            }
        });

    if !well_formed {
        return Err(DateError::Shape);
    }

    Ok(NaiveDate::parse_from_str(value, DATE_FORMAT)?)
}

/// Formats a calendar date as zero-padded `dd/MM/yyyy`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter for `NaiveDate` fields using [`DATE_FORMAT`].
///
/// Use with `#[serde(with = "crate::model::date::wire")]`.
pub mod wire {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let value = String::deserialize(deserializer)?;
        super::parse_date(&value).map_err(D::Error::custom)
    }
}
