use chrono::NaiveDateTime;
use log::debug;

use crate::core::store::RecordingStore;
use crate::errors::AppResult;
use crate::models::{DailyRecording, YearMonth};

/// High-level business logic for the `track` command.
pub struct TrackLogic;

impl TrackLogic {
    /// Makes sure the month of `now` has a file, then punches `now`.
    pub fn apply(store: &RecordingStore, now: NaiveDateTime) -> AppResult<DailyRecording> {
        let month = YearMonth::from_date(&now);

        if store.create_monthly_recording_if_absent(month)? {
            debug!("New monthly recording for {} created", month);
        }

        store.write_record(now)
    }
}
