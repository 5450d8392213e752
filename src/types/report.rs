use crate::collab::store::ResultRecord;
use crate::types::assessment::AssessmentDefinition;
use crate::types::result::AssessmentResult;
use serde::Serialize;

/// Scored submission ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub assessment_id: String,
    pub title: String,
    pub question_count: usize,
    pub result: AssessmentResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<ResultRecord>,
}

impl ScoreReport {
    pub fn new(definition: &AssessmentDefinition, result: AssessmentResult) -> Self {
        Self {
            assessment_id: definition.id.clone(),
            title: definition.title.clone(),
            question_count: definition.question_count(),
            result,
            saved: None,
        }
    }

    pub fn with_saved(mut self, record: ResultRecord) -> Self {
        self.saved = Some(record);
        self
    }
}

/// Past submissions for one respondent.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryReport {
    pub respondent: String,
    pub records: Vec<ResultRecord>,
}
