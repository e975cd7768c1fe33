//! Human-readable duration strings such as `"30s"`, `"5m"`, or `"1h30m"`.
//!
//! `serialize`/`deserialize` plug into `serialize_with`/`deserialize_with`
//! on `Duration` fields; `option::deserialize` handles optional ones.

use serde::{Deserialize, Deserializer, Serializer, de};
use std::time::Duration;

/// Parse a duration string made of `<number><unit>` groups.
///
/// Numbers may be fractional (`"1.5h"`), and a bare `"0"` needs no unit.
/// Negative values are rejected.
pub fn parse(value: &str) -> Result<Duration, humantime::DurationError> {
    humantime::parse_duration(value.trim())
}

/// Format a duration in the same form `parse` accepts.
pub fn format(value: Duration) -> String {
    humantime::format_duration(value).to_string()
}

pub(crate) fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&humantime::format_duration(*value))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|err| de::Error::custom(format!("invalid duration {raw:?}: {err}")))
}

/// Optional variant: `null` and a missing field both yield `None`.
pub(crate) mod option {
    use super::parse;
    use serde::{Deserialize, Deserializer, de};
    use std::time::Duration;

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        parse(&raw)
            .map(Some)
            .map_err(|err| de::Error::custom(format!("invalid duration {raw:?}: {err}")))
    }
}
