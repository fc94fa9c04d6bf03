//! Serde adapters for the backend's loose date encodings
//!
//! The backend is not consistent about temporal fields: timestamps usually
//! arrive as RFC 3339 (`2024-03-05T00:00:00.000Z`), but forms historically
//! posted bare dates (`2024-03-05`) and `datetime-local` values without a
//! zone (`2024-03-05T14:30`), and the server echoes whatever it stored.
//! These modules accept every shape seen on the wire and always serialize
//! back to the strictest one.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

/// Parse any wire shape into a UTC timestamp.
pub(crate) fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Expand any accepted wire shape to the canonical ISO form the backend
/// stores (`2024-03-05T00:00:00.000Z`). Used when submitting
/// `datetime-local` form values.
pub fn expand_datetime(raw: &str) -> Option<String> {
    parse_datetime(raw).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Parse any wire shape into a calendar date (time part dropped).
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    parse_datetime(raw).map(|dt| dt.date_naive())
}

// ============================================================================
// DateTime<Utc>
// ============================================================================

pub mod flex_datetime {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(de)?;
        parse_datetime(&raw)
            .ok_or_else(|| D::Error::custom(format!("unrecognized timestamp '{raw}'")))
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

// ============================================================================
// Option<DateTime<Utc>>
// ============================================================================

pub mod flex_datetime_opt {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        de: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(de)?;
        match raw {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => parse_datetime(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("unrecognized timestamp '{s}'"))),
        }
    }

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => ser.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => ser.serialize_none(),
        }
    }
}

// ============================================================================
// NaiveDate
// ============================================================================

pub mod flex_date {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(de)?;
        parse_date(&raw).ok_or_else(|| D::Error::custom(format!("unrecognized date '{raw}'")))
    }

    pub fn serialize<S: Serializer>(value: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&value.format("%Y-%m-%d").to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
