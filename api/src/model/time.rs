//! Time-of-day fields travel as `"HH:MM"`. Input may also carry seconds.

use chrono::NaiveTime;
use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

const OUTPUT_FORMAT: &str = "%H:%M";

fn parse(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
}

pub fn serialize<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.format(OUTPUT_FORMAT).to_string())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|_| D::Error::custom(format!("invalid time of day: {raw}")))
}

pub mod option {
    use super::parse;
    use chrono::NaiveTime;
    use serde::{de::Error as _, Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw)
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid time of day: {raw}"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Slot {
        #[serde(with = "super")]
        at: NaiveTime,
    }

    #[test]
    fn accepts_minutes_or_seconds_and_writes_minutes() {
        let slot: Slot = serde_json::from_str(r#"{"at":"15:00:00"}"#).unwrap();
        assert_eq!(slot.at, NaiveTime::from_hms_opt(15, 0, 0).unwrap());

        let slot: Slot = serde_json::from_str(r#"{"at":"09:30"}"#).unwrap();
        assert_eq!(serde_json::to_string(&slot).unwrap(), r#"{"at":"09:30"}"#);
    }

    #[test]
    fn seconds_are_kept_in_value_but_not_written() {
        let slot: Slot = serde_json::from_str(r#"{"at":"15:30:45"}"#).unwrap();
        assert_eq!(slot.at, NaiveTime::from_hms_opt(15, 30, 45).unwrap());
        assert_eq!(serde_json::to_string(&slot).unwrap(), r#"{"at":"15:30"}"#);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Slot>(r#"{"at":"noon"}"#).is_err());
        assert!(serde_json::from_str::<Slot>(r#"{"at":"25:00"}"#).is_err());
    }
}
