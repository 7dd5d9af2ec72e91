//! File based persistence of monthly recordings.
//!
//! One pretty-printed JSON file per month, `<yyyy>-<MM>.momo`, directly under
//! the home directory. Every write goes through a temporary file in the same
//! directory that is renamed over the target, so an interrupted write never
//! leaves a truncated month file behind.
//!
//! There is no locking: two processes punching at the same moment race on
//! the read-modify-write cycle and the later rename wins.

use chrono::NaiveDateTime;
use log::{debug, trace};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::errors::{AppError, AppResult};
use crate::models::{DailyRecording, MonthDay, MonthlyRecording, YearMonth};
use crate::utils::time::truncate_datetime_to_minute;

pub const FILE_EXTENSION: &str = "momo";

pub struct RecordingStore {
    home: PathBuf,
}

impl RecordingStore {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Location of the file holding `month`.
    pub fn path_for(&self, month: YearMonth) -> PathBuf {
        self.home.join(format!("{}.{}", month, FILE_EXTENSION))
    }

    /// Creates an empty recording for `month` unless a file already exists.
    ///
    /// Returns `true` if a new file was written. Fails with
    /// [`AppError::NotFound`] if something other than a regular file occupies
    /// the path.
    pub fn create_monthly_recording_if_absent(&self, month: YearMonth) -> AppResult<bool> {
        let path = self.path_for(month);

        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {
                debug!("Monthly recording {} already exists", path.display());
                return Ok(false);
            }
            Ok(_) => {
                return Err(AppError::NotFound(format!(
                    "{} (not a regular file)",
                    display_absolute(&path)
                )));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        self.persist(&MonthlyRecording::new(month))?;
        debug!("Created monthly recording {}", path.display());
        Ok(true)
    }

    /// Registers a punch at `timestamp` (truncated to the minute) and returns
    /// the updated day.
    ///
    /// The month file must exist already, see
    /// [`create_monthly_recording_if_absent`](Self::create_monthly_recording_if_absent).
    pub fn write_record(&self, timestamp: NaiveDateTime) -> AppResult<DailyRecording> {
        let timestamp = truncate_datetime_to_minute(timestamp);
        let month = YearMonth::from_date(&timestamp);
        let mut monthly = self.load(month)?;

        let daily = monthly.day_mut_or_insert(MonthDay::from_date(&timestamp));
        daily.add(timestamp.time());
        if let Some(last) = daily.records.last()
            && last.is_reversed()
        {
            return Err(AppError::InvalidDateTime(format!(
                "{} lies before the open interval started at {}",
                timestamp.format("%Y-%m-%d %H:%M"),
                last.start.format("%H:%M")
            )));
        }
        trace!(
            "Punch {} on {} ({} records, active: {})",
            timestamp.time().format("%H:%M"),
            daily.day,
            daily.records.len(),
            daily.is_active()
        );
        let daily = daily.clone();

        self.persist(&monthly)?;
        Ok(daily)
    }

    /// Reads and validates the recording for `month`.
    pub fn load(&self, month: YearMonth) -> AppResult<MonthlyRecording> {
        let path = self.path_for(month);
        debug!("Loading monthly recording {}", path.display());

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AppError::NotFound(format!(
                "{} (no such monthly recording)",
                display_absolute(&path)
            )),
            _ => AppError::Io(e),
        })?;

        let mut monthly: MonthlyRecording =
            serde_json::from_str(&content).map_err(|e| malformed(&path, e.to_string()))?;

        validate(&mut monthly, month).map_err(|reason| malformed(&path, reason))?;
        debug!(
            "Loaded {} days, {} minutes recorded",
            monthly.days.len(),
            monthly.monthly_duration()
        );
        Ok(monthly)
    }

    /// Like [`load`](Self::load), but a missing file is `None`.
    pub fn load_if_exists(&self, month: YearMonth) -> AppResult<Option<MonthlyRecording>> {
        match self.load(month) {
            Err(AppError::NotFound(_)) => Ok(None),
            other => other.map(Some),
        }
    }

    fn persist(&self, monthly: &MonthlyRecording) -> AppResult<()> {
        let path = self.path_for(monthly.month);

        let mut sorted = monthly.clone();
        sorted.days.sort_by_key(|d| d.day);

        let mut tmp = NamedTempFile::new_in(&self.home)?;
        serde_json::to_writer_pretty(&mut tmp, &sorted).map_err(io::Error::from)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;

        trace!("Wrote {}", path.display());
        Ok(())
    }
}

/// Sorts the days and checks what sorting cannot repair.
fn validate(monthly: &mut MonthlyRecording, expected: YearMonth) -> Result<(), String> {
    if monthly.month != expected {
        return Err(format!(
            "file holds month {} instead of {}",
            monthly.month, expected
        ));
    }

    monthly.days.sort_by_key(|d| d.day);

    for pair in monthly.days.windows(2) {
        if pair[0].day == pair[1].day {
            return Err(format!("day {} recorded twice", pair[0].day));
        }
    }

    for daily in &monthly.days {
        if daily.day.month() != expected.month() {
            return Err(format!("day {} does not belong to {}", daily.day, expected));
        }
        if expected.at_day(daily.day).is_none() {
            return Err(format!("day {} does not exist in {}", daily.day, expected));
        }
        if let Some(rec) = daily.records.iter().find(|r| r.is_reversed()) {
            return Err(format!(
                "day {} has a record stopping at {} before its start {}",
                daily.day,
                rec.stop.map(|t| t.format("%H:%M").to_string()).unwrap_or_default(),
                rec.start.format("%H:%M")
            ));
        }
        if daily.open_record_misplaced() {
            return Err(format!("day {} has an open record before its last one", daily.day));
        }
    }

    Ok(())
}

fn malformed(path: &Path, reason: String) -> AppError {
    AppError::MalformedData {
        path: path.display().to_string(),
        reason,
    }
}

fn display_absolute(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
