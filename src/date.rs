//! Codec for the timestamps exchanged with the pCloud API
//!
//! pCloud formats dates following RFC 1123 with a numeric zone, like
//! `Sun, 16 Mar 2014 17:26:04 +0000`. On the wire the value is a JSON string,
//! so the token includes the surrounding quotes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt;
use std::str::FromStr;

/// Format of a timestamp, without the surrounding quotes
pub const FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

const QUOTE: char = '"';

/// Everything after the day of the week
const DATE_FORMAT: &str = "%d %b %Y %H:%M:%S %z";

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Seconds between `0001-01-01T00:00:00Z` and the unix epoch
const ZERO_TIMESTAMP: i64 = -62_135_596_800;

/// Errors raised when a timestamp doesn't match [`FORMAT`]
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("timestamp {0:?} is not surrounded by quotes")]
    Unquoted(String),
    #[error("unable to parse timestamp")]
    Parse(#[from] chrono::ParseError),
    #[error("timestamp {0:?} is not in the expected format")]
    NonCanonical(String),
}

fn format_bare(date: &DateTime<Utc>) -> String {
    date.format(FORMAT).to_string()
}

// The day of the week must be a valid name but isn't checked against the date.
fn parse_bare(value: &str) -> Result<DateTime<Utc>, FormatError> {
    let non_canonical = || FormatError::NonCanonical(value.to_string());
    let (weekday, date) = value.split_once(", ").ok_or_else(non_canonical)?;
    if !WEEKDAYS.contains(&weekday) {
        return Err(non_canonical());
    }
    let parsed = DateTime::parse_from_str(date, DATE_FORMAT)?;
    // chrono is lenient on widths, the API is not
    if parsed.format(DATE_FORMAT).to_string() != date {
        return Err(non_canonical());
    }
    Ok(parsed.with_timezone(&Utc))
}

/// Encodes a date into its wire token, quotes included.
///
/// The date is always expressed in UTC.
pub fn encode(date: &DateTime<Utc>) -> String {
    format!("{QUOTE}{}{QUOTE}", format_bare(date))
}

/// Decodes a wire token, quotes included, into a date.
///
/// # Errors
///
/// Returns a [`FormatError`] when the token is not quoted or when its content
/// doesn't match [`FORMAT`] exactly.
pub fn decode(token: &str) -> Result<DateTime<Utc>, FormatError> {
    let inner = token
        .strip_prefix(QUOTE)
        .and_then(|rest| rest.strip_suffix(QUOTE))
        .ok_or_else(|| FormatError::Unquoted(token.to_string()))?;
    parse_bare(inner)
}

// The signature of a serialize_with function must follow the pattern:
//
//    fn serialize<S>(&T, S) -> Result<S::Ok, S::Error>
//    where
//        S: Serializer
pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_bare(date))
}

// The signature of a deserialize_with function must follow the pattern:
//
//    fn deserialize<'de, D>(D) -> Result<T, D::Error>
//    where
//        D: Deserializer<'de>
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_bare(&value).map_err(serde::de::Error::custom)
}

/// A date as sent by the pCloud API.
///
/// The default value is [`WireTime::zero`], used when the API doesn't provide the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireTime(DateTime<Utc>);

impl WireTime {
    /// The unset date, `0001-01-01T00:00:00Z`
    pub fn zero() -> Self {
        Self(DateTime::from_timestamp(ZERO_TIMESTAMP, 0).unwrap_or(DateTime::<Utc>::MIN_UTC))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    pub fn as_date_time(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for WireTime {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<DateTime<Utc>> for WireTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<WireTime> for DateTime<Utc> {
    fn from(value: WireTime) -> Self {
        value.0
    }
}

impl fmt::Display for WireTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_bare(&self.0))
    }
}

/// Parses the unquoted text of a timestamp
impl FromStr for WireTime {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bare(s).map(Self)
    }
}

impl serde::Serialize for WireTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(&self.0, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for WireTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(Self)
    }
}
