use super::band::classify_stress;
use super::builder::build_stress;
use super::sanitize::sanitize_rating;
use crate::types::answers::AnswerCollection;
use crate::types::result::StressResult;

/// Highest value on the rating scale.
pub const RATING_MAX: u32 = 4;

/// Sum every present rating; the ceiling is taken from the answered count.
pub fn compute_stress_result(answers: &AnswerCollection, question_count: usize) -> StressResult {
    let score = answers
        .values()
        .map(sanitize_rating)
        .fold(0u32, u32::saturating_add);
    let answered = answers.len();
    let max_score = (answered as u32).saturating_mul(RATING_MAX);

    build_stress(score, max_score, classify_stress(score), answered, question_count)
}
