use crate::collab::auth::AuthProvider;
use crate::collab::store::{ResultRecord, ResultStore};
use crate::collab::LoadState;
use crate::error::{Result, ScreenError};
use crate::scoring;
use crate::scoring::sanitize::is_malformed_rating;
use crate::types::answers::AnswerCollection;
use crate::types::assessment::AssessmentDefinition;
use crate::types::result::AssessmentResult;
use std::sync::Arc;

/// Outcome of a successful submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub result: AssessmentResult,
    pub record: ResultRecord,
}

/// One respondent working through one assessment.
///
/// Owns the answer collection, so scoring always sees a consistent snapshot.
/// Identity and persistence come from the injected collaborators.
pub struct ScreeningSession<A, S> {
    definition: Arc<AssessmentDefinition>,
    answers: AnswerCollection,
    auth: Arc<A>,
    store: Arc<S>,
}

impl<A, S> ScreeningSession<A, S>
where
    A: AuthProvider + 'static,
    S: ResultStore + 'static,
{
    pub fn new(definition: Arc<AssessmentDefinition>, auth: Arc<A>, store: Arc<S>) -> Self {
        Self {
            definition,
            answers: AnswerCollection::new(),
            auth,
            store,
        }
    }

    pub fn definition(&self) -> &AssessmentDefinition {
        &self.definition
    }

    pub fn answers(&self) -> &AnswerCollection {
        &self.answers
    }

    /// Record an answer; ids outside the assessment are rejected so the
    /// collection never outgrows the question set.
    pub fn answer(&mut self, question_id: u32, value: impl Into<String>) -> Result<()> {
        if !self.definition.contains(question_id) {
            return Err(ScreenError::UnknownQuestion {
                assessment_id: self.definition.id.clone(),
                question_id,
            });
        }
        if self.answers.record(question_id, value).is_some() {
            tracing::debug!(question_id, "answer replaced");
        }
        Ok(())
    }

    /// Record every entry of `answers`, stopping at the first unknown id.
    pub fn answer_all(&mut self, answers: &AnswerCollection) -> Result<()> {
        for (question_id, value) in answers.iter() {
            self.answer(question_id, value)?;
        }
        Ok(())
    }

    pub fn result(&self) -> AssessmentResult {
        let result = scoring::score(&self.definition, &self.answers);
        if let AssessmentResult::Stress(stress) = &result {
            let malformed = self
                .answers
                .values()
                .filter(|raw| is_malformed_rating(raw))
                .count();
            if malformed > 0 {
                tracing::warn!(malformed, "non-numeric ratings scored as 0");
            }
            if stress.score() > stress.max_score() {
                tracing::warn!(
                    score = stress.score(),
                    max_score = stress.max_score(),
                    "stress total exceeds rating ceiling"
                );
            }
        }
        tracing::debug!(
            assessment = %self.definition.id,
            band = result.band_label(),
            score = result.score(),
            "scored"
        );
        result
    }

    pub fn submit(&self) -> Result<Submission> {
        let session = self.auth.current_session()?.ok_or(ScreenError::NotSignedIn)?;
        let result = self.result();
        if result.is_partial() {
            tracing::warn!(
                assessment = %self.definition.id,
                answered = self.answers.len(),
                questions = self.definition.question_count(),
                "submitting partial assessment"
            );
        }

        let record = ResultRecord::new(
            &session.respondent,
            &self.definition.id,
            &result,
            &self.answers,
        );
        let record = self.store.insert(record)?;
        Ok(Submission { result, record })
    }

    /// Rows for the signed-in respondent.
    pub fn history(&self) -> LoadState<Vec<ResultRecord>> {
        load_history(self.auth.as_ref(), self.store.as_ref())
    }
}

pub fn load_history<A, S>(auth: &A, store: &S) -> LoadState<Vec<ResultRecord>>
where
    A: AuthProvider + ?Sized,
    S: ResultStore + ?Sized,
{
    let rows = auth
        .current_session()
        .map_err(ScreenError::from)
        .and_then(|session| session.ok_or(ScreenError::NotSignedIn))
        .and_then(|session| {
            store
                .history(&session.respondent)
                .map_err(ScreenError::from)
        });
    rows.into()
}
