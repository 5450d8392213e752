use crate::types::assessment::AssessmentKind;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StressBand {
    Low,
    Medium,
    High,
}

impl StressBand {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KnowledgeBand {
    Poor,
    Adequate,
    Good,
}

impl KnowledgeBand {
    pub fn label(self) -> &'static str {
        match self {
            Self::Poor => "POOR",
            Self::Adequate => "ADEQUATE",
            Self::Good => "GOOD",
        }
    }
}

impl fmt::Display for StressBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for KnowledgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scored stress-burden submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StressResult {
    score: u32,
    max_score: u32,
    band: StressBand,
    answered: usize,
    question_count: usize,
}

impl StressResult {
    pub(crate) fn new(
        score: u32,
        max_score: u32,
        band: StressBand,
        answered: usize,
        question_count: usize,
    ) -> Self {
        Self {
            score,
            max_score,
            band,
            answered,
            question_count,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn band(&self) -> StressBand {
        self.band
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Share of the answered ceiling, 0 when nothing was answered.
    pub fn percentage(&self) -> u8 {
        crate::scoring::builder::percentage(self.score, self.max_score)
    }

    pub fn is_partial(&self) -> bool {
        self.answered < self.question_count
    }
}

/// Scored knowledge quiz submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeResult {
    correct: u32,
    total: u32,
    percentage: u8,
    band: KnowledgeBand,
    answered: usize,
}

impl KnowledgeResult {
    pub(crate) fn new(
        correct: u32,
        total: u32,
        percentage: u8,
        band: KnowledgeBand,
        answered: usize,
    ) -> Self {
        Self {
            correct,
            total,
            percentage,
            band,
            answered,
        }
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    pub fn band(&self) -> KnowledgeBand {
        self.band
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn is_partial(&self) -> bool {
        self.answered < self.total as usize
    }
}

/// Either flavour of scored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AssessmentResult {
    Stress(StressResult),
    Knowledge(KnowledgeResult),
}

impl AssessmentResult {
    pub fn kind(&self) -> AssessmentKind {
        match self {
            Self::Stress(_) => AssessmentKind::Stress,
            Self::Knowledge(_) => AssessmentKind::Knowledge,
        }
    }

    pub fn band_label(&self) -> &'static str {
        match self {
            Self::Stress(result) => result.band().label(),
            Self::Knowledge(result) => result.band().label(),
        }
    }

    /// Raw measure: summed ratings or correct count.
    pub fn score(&self) -> u32 {
        match self {
            Self::Stress(result) => result.score(),
            Self::Knowledge(result) => result.correct(),
        }
    }

    pub fn max_score(&self) -> u32 {
        match self {
            Self::Stress(result) => result.max_score(),
            Self::Knowledge(result) => result.total(),
        }
    }

    /// Percentage for knowledge results; stress results report a raw total instead.
    pub fn percentage(&self) -> Option<u8> {
        match self {
            Self::Stress(_) => None,
            Self::Knowledge(result) => Some(result.percentage()),
        }
    }

    pub fn is_partial(&self) -> bool {
        match self {
            Self::Stress(result) => result.is_partial(),
            Self::Knowledge(result) => result.is_partial(),
        }
    }
}

impl From<StressResult> for AssessmentResult {
    fn from(value: StressResult) -> Self {
        Self::Stress(value)
    }
}

impl From<KnowledgeResult> for AssessmentResult {
    fn from(value: KnowledgeResult) -> Self {
        Self::Knowledge(value)
    }
}
