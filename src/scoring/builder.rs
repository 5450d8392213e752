use crate::types::result::{KnowledgeBand, KnowledgeResult, StressBand, StressResult};

/// floor(part * 100 / whole), defined as 0 for an empty whole.
pub fn percentage(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let value = u64::from(part) * 100 / u64::from(whole);
    value.min(100) as u8
}

pub fn build_stress(
    score: u32,
    max_score: u32,
    band: StressBand,
    answered: usize,
    question_count: usize,
) -> StressResult {
    StressResult::new(score, max_score, band, answered, question_count)
}

pub fn build_knowledge(
    correct: u32,
    total: u32,
    band: KnowledgeBand,
    answered: usize,
) -> KnowledgeResult {
    KnowledgeResult::new(correct, total, percentage(correct, total), band, answered)
}
