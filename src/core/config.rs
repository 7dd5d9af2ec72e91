use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    /// Default editor based on the environment and the platform.
    pub fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    pub fn edit(path: &Path, editor: &str) -> AppResult<()> {
        let status = Command::new(editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot run editor '{}': {}", editor, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                editor, status
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_is_yaml() {
        let out = ConfigLogic::print(&Config { irwaz: 32 }).unwrap();
        assert_eq!(out.trim(), "irwaz: 32");
    }
}
