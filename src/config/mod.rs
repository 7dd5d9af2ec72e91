use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppResult;

pub const CONFIG_FILE_NAME: &str = "momo.conf";
const HOME_DIR_NAME: &str = ".momo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target working hours per week.
    pub irwaz: u32,
}

fn default_irwaz() -> u32 {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            irwaz: default_irwaz(),
        }
    }
}

impl Config {
    /// Return the standard home directory (`~/.momo`)
    pub fn default_home() -> PathBuf {
        match dirs::home_dir() {
            Some(home) => home.join(HOME_DIR_NAME),
            None => PathBuf::from(HOME_DIR_NAME),
        }
    }

    /// Return the full path of the config file inside `home`
    pub fn config_file(home: &Path) -> PathBuf {
        home.join(CONFIG_FILE_NAME)
    }

    /// Load the configuration from `home`, writing the defaults first if the
    /// file does not exist yet.
    pub fn load_or_create(home: &Path) -> AppResult<Self> {
        let path = Self::config_file(home);

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let cfg: Config = serde_yaml::from_str(&content)?;
            debug!("Loaded configuration from {}", path.display());
            Ok(cfg)
        } else {
            let cfg = Config::default();
            cfg.save(home)?;
            debug!("Created default configuration at {}", path.display());
            Ok(cfg)
        }
    }

    pub fn save(&self, home: &Path) -> AppResult<()> {
        fs::create_dir_all(home)?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(home), yaml)?;
        Ok(())
    }
}
