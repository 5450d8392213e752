use crate::error::ScreenError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Which scoring pipeline an assessment is routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    /// 0-4 rating scale, summed.
    Stress,
    /// Multiple choice, graded against a correct option.
    Knowledge,
}

impl AssessmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stress => "stress",
            Self::Knowledge => "knowledge",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single questionnaire item.
///
/// `correct_index` is only present on graded knowledge questions; rating
/// questions leave both `options` and `correct_index` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_index: Option<usize>,
}

impl Question {
    pub fn rating(id: u32, prompt: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options: Vec::new(),
            correct_index: None,
        }
    }

    pub fn choice<I, S>(
        id: u32,
        prompt: impl Into<String>,
        options: I,
        correct: Option<usize>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_index: correct,
        }
    }

    /// Text of the correct option, if the question is gradable and the index is in range.
    pub fn correct_option(&self) -> Option<&str> {
        self.correct_index
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
    }
}

/// A loaded questionnaire. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentDefinition {
    pub id: String,
    pub title: String,
    pub kind: AssessmentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

impl AssessmentDefinition {
    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.question(id).is_some()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn validate(&self) -> Result<(), ScreenError> {
        if self.id.trim().is_empty() {
            return Err(ScreenError::InvalidDefinition(
                "assessment id must not be empty".to_string(),
            ));
        }
        if self.questions.is_empty() {
            return Err(ScreenError::InvalidDefinition(format!(
                "{}: at least one question is required",
                self.id
            )));
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(ScreenError::InvalidDefinition(format!(
                    "{}: duplicate question id {}",
                    self.id, question.id
                )));
            }

            match (self.kind, question.correct_index) {
                (AssessmentKind::Stress, Some(_)) => {
                    return Err(ScreenError::InvalidDefinition(format!(
                        "{}: question {} sets correct_index on a stress assessment",
                        self.id, question.id
                    )));
                }
                (AssessmentKind::Knowledge, Some(index)) if index >= question.options.len() => {
                    return Err(ScreenError::InvalidDefinition(format!(
                        "{}: question {} correct_index {} is outside its {} option(s)",
                        self.id,
                        question.id,
                        index,
                        question.options.len()
                    )));
                }
                _ => {}
            }
        }

        Ok(())
    }
}
