//! Caregiver stress screening and knowledge quiz scoring.
//!
//! [`scoring`] holds the pure pipeline (answers, aggregate, band, result).
//! [`collab`] defines the identity and result-storage boundaries, and
//! [`session`] ties them together for one respondent and one assessment.

pub mod catalog;
pub mod cli;
pub mod collab;
pub mod config;
pub mod error;
pub mod intake;
pub mod logging;
pub mod report;
pub mod scoring;
pub mod session;
pub mod types;

pub use collab::auth::{AuthError, AuthProvider, FileAuth, MemoryAuth, Session};
pub use collab::store::{
    JsonlResultStore, MemoryResultStore, ResultRecord, ResultStore, StoreError,
};
pub use collab::LoadState;
pub use error::{Result, ScreenError};
pub use scoring::{compute_knowledge_result, compute_stress_result, sanitize_rating};
pub use session::{ScreeningSession, Submission};
pub use types::answers::AnswerCollection;
pub use types::assessment::{AssessmentDefinition, AssessmentKind, Question};
pub use types::result::{
    AssessmentResult, KnowledgeBand, KnowledgeResult, StressBand, StressResult,
};
