use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Respondent answers keyed by question id.
///
/// One value per question; recording again overwrites. Ordered so that
/// serialization and digests are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerCollection {
    values: BTreeMap<u32, String>,
}

impl AnswerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` for `question_id`, returning the value it replaced.
    pub fn record(&mut self, question_id: u32, value: impl Into<String>) -> Option<String> {
        self.values.insert(question_id, value.into())
    }

    pub fn get(&self, question_id: u32) -> Option<&str> {
        self.values.get(&question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.values.iter().map(|(id, value)| (*id, value.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.values().map(String::as_str)
    }

    /// Hex SHA-256 over the canonical `id=value` lines.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for (id, value) in &self.values {
            hasher.update(format!("{id}={value}\n").as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for AnswerCollection {
    fn from_iter<T: IntoIterator<Item = (u32, S)>>(iter: T) -> Self {
        let mut answers = Self::new();
        for (id, value) in iter {
            answers.record(id, value);
        }
        answers
    }
}
