use chrono::NaiveDateTime;
use log::debug;
use std::fs;
use std::path::PathBuf;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::RecordingStore;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time;

/// Everything a command needs, resolved once from the parsed command line.
pub struct AppContext {
    pub home: PathBuf,
    /// Reference instant for punches and reports.
    pub now: NaiveDateTime,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let home = match &cli.alt_home {
            Some(dir) => expand_tilde(dir),
            None => Config::default_home(),
        };
        fs::create_dir_all(&home)?;
        debug!("Using home directory {}", home.display());

        let now = match &cli.now {
            Some(s) => parse_now(s)?,
            None => time::now(),
        };

        Ok(Self { home, now })
    }

    pub fn store(&self) -> RecordingStore {
        RecordingStore::new(&self.home)
    }

    pub fn config(&self) -> AppResult<Config> {
        Config::load_or_create(&self.home)
    }
}

fn parse_now(s: &str) -> AppResult<NaiveDateTime> {
    ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidDateTime(s.to_string()))
}
