//! Tolerant timestamp (de)serialization for backend records.
//!
//! The backend emits timestamps in whatever shape its framework picked:
//! RFC 3339 from newer endpoints, RFC 2822 from Flask's `jsonify`, and bare
//! MySQL `YYYY-MM-DD HH:MM:SS` strings from raw queries. All are accepted;
//! serialization is always RFC 3339.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse any timestamp shape the backend has been observed to send.
#[must_use]
pub fn parse_flexible(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // MySQL datetime, assumed UTC
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// serde adapter: `#[serde(with = "cfp_core::time::flexible")]`.
pub mod flexible {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(de)?;
        super::parse_flexible(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unparseable timestamp '{raw}'")))
    }
}
