use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Signed-in respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub respondent: String,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(respondent: impl Into<String>) -> Self {
        Self {
            respondent: respondent.into(),
            signed_in_at: Utc::now(),
        }
    }
}

/// Session management, delegated to whatever identity provider backs the app.
pub trait AuthProvider: Send + Sync {
    fn sign_in(&self, respondent: &str) -> Result<Session, AuthError>;
    fn sign_out(&self) -> Result<(), AuthError>;
    fn current_session(&self) -> Result<Option<Session>, AuthError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("respondent id must not be empty")]
    EmptyRespondent,
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    #[error("session file is corrupt: {0}")]
    Corrupt(String),
}

fn normalize_respondent(respondent: &str) -> Result<String, AuthError> {
    let trimmed = respondent.trim();
    if trimmed.is_empty() {
        return Err(AuthError::EmptyRespondent);
    }
    Ok(trimmed.to_string())
}

/// Session kept as a JSON file inside the data directory.
#[derive(Debug, Clone)]
pub struct FileAuth {
    path: PathBuf,
}

impl FileAuth {
    pub const SESSION_FILE: &'static str = "session.json";

    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(Self::SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuthProvider for FileAuth {
    fn sign_in(&self, respondent: &str) -> Result<Session, AuthError> {
        let session = Session::new(normalize_respondent(respondent)?);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AuthError::Unavailable(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&session)
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| AuthError::Unavailable(e.to_string()))?;
        tracing::info!(respondent = %session.respondent, "signed in");
        Ok(session)
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("signed out");
                Ok(())
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(AuthError::Unavailable(error.to_string())),
        }
    }

    fn current_session(&self) -> Result<Option<Session>, AuthError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(AuthError::Unavailable(error.to_string())),
        };
        let session = serde_json::from_str(&content)
            .map_err(|e| AuthError::Corrupt(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(session))
    }
}

/// In-process provider for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryAuth {
    session: Mutex<Option<Session>>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(respondent: &str) -> Self {
        Self {
            session: Mutex::new(Some(Session::new(respondent))),
        }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<Session>>, AuthError> {
        self.session
            .lock()
            .map_err(|_| AuthError::Unavailable("session lock poisoned".to_string()))
    }
}

impl AuthProvider for MemoryAuth {
    fn sign_in(&self, respondent: &str) -> Result<Session, AuthError> {
        let session = Session::new(normalize_respondent(respondent)?);
        *self.slot()? = Some(session.clone());
        Ok(session)
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        *self.slot()? = None;
        Ok(())
    }

    fn current_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.slot()?.clone())
    }
}
