use serde::{Deserialize, Serialize};

use super::daily_recording::DailyRecording;
use super::period::{MonthDay, YearMonth};

/// Everything recorded for one month. `days` is sorted ascending and holds
/// at most one entry per day; the store keeps it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecording {
    pub month: YearMonth,
    #[serde(default)]
    pub days: Vec<DailyRecording>,
}

impl MonthlyRecording {
    pub fn new(month: YearMonth) -> Self {
        Self {
            month,
            days: Vec::new(),
        }
    }

    pub fn day(&self, day: MonthDay) -> Option<&DailyRecording> {
        self.days
            .binary_search_by_key(&day, |d| d.day)
            .ok()
            .map(|i| &self.days[i])
    }

    /// Returns the entry for `day`, inserting an empty one in day order if
    /// there is none yet. The common case (today is the last day) never
    /// searches.
    pub fn day_mut_or_insert(&mut self, day: MonthDay) -> &mut DailyRecording {
        let idx = if self.days.last().is_some_and(|d| d.day == day) {
            self.days.len() - 1
        } else {
            match self.days.binary_search_by_key(&day, |d| d.day) {
                Ok(i) => i,
                Err(i) => {
                    self.days.insert(i, DailyRecording::new(day));
                    i
                }
            }
        };
        &mut self.days[idx]
    }

    /// Total of all daily durations in minutes.
    pub fn monthly_duration(&self) -> i64 {
        self.days.iter().map(DailyRecording::daily_duration).sum()
    }
}
