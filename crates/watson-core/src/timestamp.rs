use std::{fmt, str::FromStr};

use jiff::tz::Offset;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{ModelError, Result};

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3fZ";

/// A UTC instant with millisecond precision
///
/// Written on the wire as `yyyy-MM-dd'T'HH:mm:ss.SSS'Z'`. Any RFC 3339
/// instant is accepted when reading; sub-millisecond digits are dropped so
/// that the canonical form always round-trips unchanged. Only years
/// 0000 through 9999 fit the four-digit year, anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(jiff::Timestamp);

impl Timestamp {
    pub fn from_millisecond(millisecond: i64) -> Result<Self> {
        let instant = jiff::Timestamp::from_millisecond(millisecond)
            .map_err(|e| invalid(format!("millisecond {millisecond} is out of range: {e}")))?;
        Self::try_from(instant)
    }

    pub fn as_millisecond(self) -> i64 {
        self.0.as_millisecond()
    }

    pub const fn as_jiff(self) -> jiff::Timestamp {
        self.0
    }
}

fn invalid(message: String) -> ModelError {
    ModelError::InvalidArgument {
        model: "Timestamp",
        message,
    }
}

impl TryFrom<jiff::Timestamp> for Timestamp {
    type Error = ModelError;

    fn try_from(value: jiff::Timestamp) -> Result<Self> {
        let year = Offset::UTC.to_datetime(value).year();
        if !(0..=9999).contains(&year) {
            return Err(invalid(format!("year {year} of `{value}` is outside 0000..=9999")));
        }

        jiff::Timestamp::from_millisecond(value.as_millisecond())
            .map(Self)
            .map_err(|e| invalid(format!("`{value}` is out of range: {e}")))
    }
}

impl From<Timestamp> for jiff::Timestamp {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.strftime(WIRE_FORMAT), f)
    }
}

impl FromStr for Timestamp {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let instant = s
            .parse::<jiff::Timestamp>()
            .map_err(|e| invalid(format!("invalid timestamp `{s}`: {e}")))?;
        Self::try_from(instant)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_round_trips() {
        let text = "2017-05-16T13:56:54.957Z";
        let timestamp: Timestamp = text.parse().unwrap();
        assert_eq!(timestamp.to_string(), text);
    }

    #[test]
    fn epoch_renders_with_milliseconds() {
        let timestamp = Timestamp::from_millisecond(0).unwrap();
        assert_eq!(timestamp.to_string(), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        let timestamp: Timestamp = "2017-05-16T15:56:54.957+02:00".parse().unwrap();
        assert_eq!(timestamp.to_string(), "2017-05-16T13:56:54.957Z");
    }

    #[test]
    fn sub_millisecond_digits_are_dropped() {
        let timestamp: Timestamp = "1970-01-01T00:00:01.500999Z".parse().unwrap();
        assert_eq!(timestamp.as_millisecond(), 1500);
        assert_eq!(timestamp.to_string(), "1970-01-01T00:00:01.500Z");
    }

    #[test]
    fn garbage_is_an_invalid_argument() {
        let err = "yesterday".parse::<Timestamp>().unwrap_err();
        assert!(matches!(err, ModelError::InvalidArgument { model: "Timestamp", .. }));
    }

    #[test]
    fn serde_uses_the_wire_format() {
        let timestamp = Timestamp::from_millisecond(1_500).unwrap();
        let json = serde_json::to_string(&timestamp).unwrap();
        assert_eq!(json, r#""1970-01-01T00:00:01.500Z""#);

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, timestamp);
    }

    #[test]
    fn serde_rejects_non_timestamps() {
        assert!(serde_json::from_str::<Timestamp>(r#""not a date""#).is_err());
        assert!(serde_json::from_str::<Timestamp>("12").is_err());
    }

    #[test]
    fn snapshot_of_wire_form() {
        let timestamp: Timestamp = "2017-11-07T08:30:00.000Z".parse().unwrap();
        insta::assert_json_snapshot!(timestamp, @r#""2017-11-07T08:30:00.000Z""#);
    }

    #[test]
    fn year_zero_is_the_earliest_instant() {
        let earliest = Timestamp::from_millisecond(-62_167_219_200_000).unwrap();
        assert_eq!(earliest.to_string(), "0000-01-01T00:00:00.000Z");
        assert_eq!("0000-01-01T00:00:00.000Z".parse::<Timestamp>().unwrap(), earliest);

        let err = Timestamp::from_millisecond(-62_167_219_200_001).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArgument { model: "Timestamp", .. }));
    }

    #[test]
    fn year_9999_round_trips() {
        let text = "9999-01-01T00:00:00.000Z";
        let timestamp: Timestamp = text.parse().unwrap();
        assert_eq!(timestamp.to_string(), text);
        assert_eq!(Timestamp::from_millisecond(timestamp.as_millisecond()).unwrap(), timestamp);
    }

    #[test]
    fn negative_years_are_rejected() {
        let err = Timestamp::from_millisecond(-70_000_000_000_000).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArgument { model: "Timestamp", .. }));

        assert!("-000249-10-15T19:33:20Z".parse::<Timestamp>().is_err());
        assert!(Timestamp::try_from(jiff::Timestamp::MIN).is_err());
    }

    #[test]
    fn jiff_instants_are_truncated_to_milliseconds() {
        let instant = jiff::Timestamp::new(1, 500_999_000).unwrap();
        let timestamp = Timestamp::try_from(instant).unwrap();
        assert_eq!(timestamp.as_millisecond(), 1500);
    }
}
