use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::period::MonthDay;
use super::time_record::TimeRecord;

/// All punches of one calendar day, in chronological order.
///
/// At most one record is open and, if so, it is the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecording {
    pub day: MonthDay,
    #[serde(default)]
    pub records: Vec<TimeRecord>,
}

impl DailyRecording {
    pub fn new(day: MonthDay) -> Self {
        Self {
            day,
            records: Vec::new(),
        }
    }

    /// Registers a punch: closes the trailing open record, or opens a new one.
    ///
    /// `time` is assumed to be later than the previous punch; this is not checked.
    pub fn add(&mut self, time: NaiveTime) {
        match self.records.last_mut() {
            Some(last) if last.is_open() => *last = TimeRecord::closed(last.start, time),
            _ => self.records.push(TimeRecord::open(time)),
        }
    }

    /// True while the last record is still open.
    pub fn is_active(&self) -> bool {
        self.records.last().is_some_and(TimeRecord::is_open)
    }

    /// Total of all closed records in minutes.
    pub fn daily_duration(&self) -> i64 {
        self.records.iter().map(TimeRecord::duration).sum()
    }

    /// Like [`daily_duration`](Self::daily_duration), but a trailing open
    /// record counts up to `until`.
    pub fn duration_until(&self, until: NaiveTime) -> i64 {
        self.records.iter().map(|r| r.closed_at(until).duration()).sum()
    }

    /// Checks the single-open-record-at-the-end invariant.
    pub(crate) fn open_record_misplaced(&self) -> bool {
        let n = self.records.len();
        self.records
            .iter()
            .enumerate()
            .any(|(i, r)| r.is_open() && i + 1 != n)
    }
}
