use crate::types::answers::AnswerCollection;
use crate::types::assessment::AssessmentKind;
use crate::types::result::AssessmentResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Persisted row for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub respondent: String,
    pub assessment_id: String,
    pub kind: AssessmentKind,
    pub band: String,
    pub score: u32,
    pub max_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u8>,
    pub answers_sha256: String,
    pub recorded_at: DateTime<Utc>,
}

impl ResultRecord {
    pub fn new(
        respondent: &str,
        assessment_id: &str,
        result: &AssessmentResult,
        answers: &AnswerCollection,
    ) -> Self {
        Self {
            respondent: respondent.to_string(),
            assessment_id: assessment_id.to_string(),
            kind: result.kind(),
            band: result.band_label().to_string(),
            score: result.score(),
            max_score: result.max_score(),
            percentage: result.percentage(),
            answers_sha256: answers.digest(),
            recorded_at: Utc::now(),
        }
    }
}

/// Row storage for scored submissions.
pub trait ResultStore: Send + Sync {
    fn insert(&self, record: ResultRecord) -> Result<ResultRecord, StoreError>;
    /// Rows for `respondent`, oldest first.
    fn history(&self, respondent: &str) -> Result<Vec<ResultRecord>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("result store unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt history entry at {path}:{line}: {message}")]
    Corrupt {
        path: String,
        line: usize,
        message: String,
    },
}

/// Append-only JSON lines file.
#[derive(Debug, Clone)]
pub struct JsonlResultStore {
    path: PathBuf,
}

impl JsonlResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<ResultRecord>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(StoreError::Unavailable(error.to_string())),
        };

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| StoreError::Corrupt {
                    path: self.path.display().to_string(),
                    line: index + 1,
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

impl ResultStore for JsonlResultStore {
    fn insert(&self, record: ResultRecord) -> Result<ResultRecord, StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        }
        let line =
            serde_json::to_string(&record).map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        writeln!(file, "{line}").map_err(|e| StoreError::Unavailable(e.to_string()))?;
        file.flush()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        tracing::info!(
            respondent = %record.respondent,
            assessment = %record.assessment_id,
            band = %record.band,
            "result stored"
        );
        Ok(record)
    }

    fn history(&self, respondent: &str) -> Result<Vec<ResultRecord>, StoreError> {
        let mut rows = self
            .read_all()?
            .into_iter()
            .filter(|record| record.respondent == respondent)
            .collect::<Vec<_>>();
        rows.sort_by_key(|record| record.recorded_at);
        Ok(rows)
    }
}

#[derive(Debug, Default)]
pub struct MemoryResultStore {
    rows: Mutex<Vec<ResultRecord>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultStore for MemoryResultStore {
    fn insert(&self, record: ResultRecord) -> Result<ResultRecord, StoreError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        rows.push(record.clone());
        Ok(record)
    }

    fn history(&self, respondent: &str) -> Result<Vec<ResultRecord>, StoreError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        Ok(rows
            .iter()
            .filter(|record| record.respondent == respondent)
            .cloned()
            .collect())
    }
}
