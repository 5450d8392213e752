use crate::collab::auth::AuthError;
use crate::collab::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid assessment definition: {0}")]
    InvalidDefinition(String),

    #[error("assessment not found: {0}")]
    AssessmentNotFound(String),

    #[error("invalid answers file: {0}")]
    InvalidAnswers(String),

    #[error("question {question_id} is not part of assessment {assessment_id}")]
    UnknownQuestion {
        assessment_id: String,
        question_id: u32,
    },

    #[error("no respondent is signed in; run `carescreen login <respondent>` first")]
    NotSignedIn,

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScreenError>;
