//! Answer aggregation, band classification and result building.
//!
//! Everything here is pure: no I/O, no shared state, and no error paths.
//! Malformed ratings score 0 and an empty ceiling yields a 0 percentage.

pub mod band;
pub mod builder;
pub mod knowledge;
pub mod sanitize;
pub mod stress;

pub use band::{classify_knowledge, classify_stress};
pub use knowledge::compute_knowledge_result;
pub use sanitize::sanitize_rating;
pub use stress::compute_stress_result;

use crate::types::answers::AnswerCollection;
use crate::types::assessment::{AssessmentDefinition, AssessmentKind};
use crate::types::result::AssessmentResult;

/// Route a submission through the pipeline matching the assessment's kind.
pub fn score(definition: &AssessmentDefinition, answers: &AnswerCollection) -> AssessmentResult {
    match definition.kind {
        AssessmentKind::Stress => {
            compute_stress_result(answers, definition.question_count()).into()
        }
        AssessmentKind::Knowledge => {
            compute_knowledge_result(&definition.questions, answers).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::assessment::Question;

    #[test]
    fn score_dispatches_on_kind() {
        let stress = AssessmentDefinition {
            id: "stress".to_string(),
            title: "Stress".to_string(),
            kind: AssessmentKind::Stress,
            description: None,
            questions: vec![Question::rating(1, "a"), Question::rating(2, "b")],
        };
        let answers: AnswerCollection = [(1, "4"), (2, "4")].into_iter().collect();

        let result = score(&stress, &answers);
        assert_eq!(result.kind(), AssessmentKind::Stress);
        assert_eq!(result.score(), 8);
        assert_eq!(result.percentage(), None);

        let repeat = score(&stress, &answers);
        assert_eq!(result, repeat);
    }
}
