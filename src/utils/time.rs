//! Time utilities: parsing HH:MM, truncating to the minute, serde helpers.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Drops seconds and sub-seconds.
pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

pub fn truncate_datetime_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.date().and_time(truncate_to_minute(dt.time()))
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Serde adapter storing a `NaiveTime` as `"HH:MM"`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_time(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time '{}', expected HH:MM", s)))
    }

    /// Same as the parent module, for optional values.
    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            t: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match t {
                Some(t) => super::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            let s: Option<String> = Option::deserialize(deserializer)?;
            match s {
                Some(s) => crate::utils::time::parse_time(&s).map(Some).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid time '{}', expected HH:MM", s))
                }),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn truncation_drops_seconds() {
        let t = NaiveTime::from_hms_milli_opt(16, 45, 59, 999).unwrap();
        assert_eq!(truncate_to_minute(t), NaiveTime::from_hms_opt(16, 45, 0).unwrap());

        let dt = NaiveDate::from_ymd_opt(2023, 8, 16)
            .unwrap()
            .and_hms_opt(23, 59, 30)
            .unwrap();
        assert_eq!(
            truncate_datetime_to_minute(dt),
            NaiveDate::from_ymd_opt(2023, 8, 16)
                .unwrap()
                .and_hms_opt(23, 59, 0)
                .unwrap()
        );
    }

    #[test]
    fn parse_and_format_hh_mm() {
        let t = parse_time("08:05").unwrap();
        assert_eq!(format_time(t), "08:05");
        assert!(parse_time("8 o'clock").is_none());
    }
}
