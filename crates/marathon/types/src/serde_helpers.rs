//! Serde helpers shared by the wire documents.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Decodes an explicit JSON `null` as the type's default.
///
/// Marathon reports unset collections as `null` rather than omitting them.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn is_zero(value: &u32) -> bool {
    *value == 0
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Other(#[allow(dead_code)] IgnoredAny),
}

/// Decodes an RFC 3339 timestamp; empty, malformed or non-string values
/// decode as `None`.
pub(crate) fn lenient_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(RawTimestamp::Text(text)) => DateTime::parse_from_rfc3339(&text)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc)),
        Some(RawTimestamp::Other(_)) | None => None,
    };
    Ok(parsed)
}
