use crate::types::result::{KnowledgeBand, StressBand};

/// Upper bound (inclusive) of the stress ranges, checked in order.
pub const STRESS_LOW_MAX: u32 = 13;
pub const STRESS_MEDIUM_MAX: u32 = 26;
pub const STRESS_HIGH_MAX: u32 = 40;

const STRESS_MEDIUM_MIN: u32 = STRESS_LOW_MAX + 1;
const STRESS_HIGH_MIN: u32 = STRESS_MEDIUM_MAX + 1;

/// Lower bound (inclusive) of the knowledge ranges.
pub const KNOWLEDGE_GOOD_MIN: u8 = 76;
pub const KNOWLEDGE_ADEQUATE_MIN: u8 = 56;

pub fn classify_stress(score: u32) -> StressBand {
    match score {
        0..=STRESS_LOW_MAX => StressBand::Low,
        STRESS_MEDIUM_MIN..=STRESS_MEDIUM_MAX => StressBand::Medium,
        STRESS_HIGH_MIN..=STRESS_HIGH_MAX => StressBand::High,
        // sums above the nominal 10-item ceiling
        _ => StressBand::High,
    }
}

pub fn classify_knowledge(percentage: u8) -> KnowledgeBand {
    if percentage >= KNOWLEDGE_GOOD_MIN {
        KnowledgeBand::Good
    } else if percentage >= KNOWLEDGE_ADEQUATE_MIN {
        KnowledgeBand::Adequate
    } else {
        KnowledgeBand::Poor
    }
}
