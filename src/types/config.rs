use crate::error::ScreenError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = ".carescreen";
pub const DEFAULT_HISTORY_FILE: &str = "history.jsonl";
pub const DEFAULT_ASSESSMENTS_DIR: &str = "assessments";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenConfig {
    pub respondent: Option<RespondentConfig>,
    pub storage: Option<StorageConfig>,
    pub assessments: Option<AssessmentsConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RespondentConfig {
    /// Used by `login` when no respondent is passed.
    pub default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
    /// Relative paths resolve against the data directory.
    pub history_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentsConfig {
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl ScreenConfig {
    pub fn default_respondent(&self) -> Option<&str> {
        self.respondent
            .as_ref()
            .and_then(|respondent| respondent.default.as_deref())
    }

    pub fn data_dir(&self, root: &Path) -> PathBuf {
        let dir = self
            .storage
            .as_ref()
            .and_then(|storage| storage.data_dir.as_deref())
            .unwrap_or(DEFAULT_DATA_DIR);
        resolve_path(root, dir)
    }

    pub fn history_file(&self, root: &Path) -> PathBuf {
        let file = self
            .storage
            .as_ref()
            .and_then(|storage| storage.history_file.as_deref())
            .unwrap_or(DEFAULT_HISTORY_FILE);
        resolve_path(&self.data_dir(root), file)
    }

    pub fn assessments_dir(&self, root: &Path) -> PathBuf {
        let dir = self
            .assessments
            .as_ref()
            .and_then(|assessments| assessments.dir.as_deref())
            .unwrap_or(DEFAULT_ASSESSMENTS_DIR);
        resolve_path(root, dir)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), ScreenError> {
        if let Some(respondent) = self.default_respondent() {
            if respondent.trim().is_empty() {
                return Err(ScreenError::ConfigParse(
                    "respondent.default must not be empty".to_string(),
                ));
            }
        }

        if let Some(storage) = &self.storage {
            for (key, value) in [
                ("storage.data_dir", &storage.data_dir),
                ("storage.history_file", &storage.history_file),
            ] {
                if value.as_deref().map(str::trim) == Some("") {
                    return Err(ScreenError::ConfigParse(format!(
                        "{key} must not be empty"
                    )));
                }
            }
        }

        if let Some(dir) = self
            .assessments
            .as_ref()
            .and_then(|assessments| assessments.dir.as_deref())
        {
            if dir.trim().is_empty() {
                return Err(ScreenError::ConfigParse(
                    "assessments.dir must not be empty".to_string(),
                ));
            }
        }

        if !matches!(
            self.log_level().to_ascii_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace" | "off"
        ) {
            return Err(ScreenError::ConfigParse(format!(
                "unsupported logging.level: {}",
                self.log_level()
            )));
        }

        Ok(())
    }
}

fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        candidate
    } else {
        base.join(candidate)
    }
}
