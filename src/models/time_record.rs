use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::utils::time::hhmm;

/// One working interval of a day. `stop` is absent while the interval is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRecord {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(
        with = "hhmm::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub stop: Option<NaiveTime>,
}

impl TimeRecord {
    pub fn open(start: NaiveTime) -> Self {
        Self { start, stop: None }
    }

    pub fn closed(start: NaiveTime, stop: NaiveTime) -> Self {
        Self {
            start,
            stop: Some(stop),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stop.is_none()
    }

    /// A copy of this record, closed at `stop` unless it already is.
    pub fn closed_at(&self, stop: NaiveTime) -> Self {
        Self {
            start: self.start,
            stop: self.stop.or(Some(stop)),
        }
    }

    /// A closed record whose stop lies before its start.
    pub fn is_reversed(&self) -> bool {
        self.stop.is_some_and(|stop| stop < self.start)
    }

    /// Duration in whole minutes; an open record is always zero.
    pub fn duration(&self) -> i64 {
        match self.stop {
            Some(stop) => (stop - self.start).num_seconds() / 60,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn duration_of_closed_record() {
        assert_eq!(TimeRecord::closed(t(10, 13), t(11, 30)).duration(), 77);
    }

    #[test]
    fn duration_of_whole_day() {
        assert_eq!(TimeRecord::closed(t(0, 0), t(23, 59)).duration(), 1439);
    }

    #[test]
    fn duration_of_open_record_is_zero() {
        let rec = TimeRecord::open(t(10, 13));
        assert!(rec.is_open());
        assert_eq!(rec.duration(), 0);
    }

    #[test]
    fn partial_minutes_are_floored() {
        let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let stop = NaiveTime::from_hms_opt(9, 1, 59).unwrap();
        assert_eq!(TimeRecord::closed(start, stop).duration(), 1);
    }

    #[test]
    fn closed_at_keeps_existing_stop() {
        let rec = TimeRecord::closed(t(8, 0), t(9, 0));
        assert_eq!(rec.closed_at(t(17, 0)).stop, Some(t(9, 0)));

        let open = TimeRecord::open(t(16, 45));
        assert_eq!(open.closed_at(t(17, 0)).duration(), 15);
        assert!(open.is_open());
    }

    #[test]
    fn open_record_omits_stop_in_json() {
        let json = serde_json::to_string(&TimeRecord::open(t(15, 59))).unwrap();
        assert_eq!(json, r#"{"start":"15:59"}"#);

        let back: TimeRecord = serde_json::from_str(r#"{"start":"10:30","stop":"11:00"}"#).unwrap();
        assert_eq!(back, TimeRecord::closed(t(10, 30), t(11, 0)));
    }

    #[test]
    fn reversed_only_when_closed_before_start() {
        assert!(TimeRecord::closed(t(17, 0), t(9, 0)).is_reversed());
        assert!(!TimeRecord::closed(t(9, 0), t(9, 0)).is_reversed());
        assert!(!TimeRecord::open(t(17, 0)).is_reversed());
    }
}
