//! Serde helpers for minute-precision clock times ("HH:MM").
//!
//! `NaiveTime` serializes with seconds by default; meeting times are minute
//! precision on every boundary, so this module is used with
//! `#[serde(with = "...")]` on the relevant fields.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

use crate::constants::TIME_FORMAT;

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        time: NaiveTime,
    }

    #[test]
    fn round_trips_minute_precision() {
        let json = r#"{"time":"09:05"}"#;
        let wrapper: Wrapper = serde_json::from_str(json).unwrap();
        assert_eq!(wrapper.time, NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert_eq!(serde_json::to_string(&wrapper).unwrap(), json);
    }

    #[test]
    fn rejects_seconds() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"time":"09:05:30"}"#).is_err());
    }
}
