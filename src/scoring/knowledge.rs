use super::band::classify_knowledge;
use super::builder::{build_knowledge, percentage};
use crate::types::answers::AnswerCollection;
use crate::types::assessment::Question;
use crate::types::result::KnowledgeResult;

/// Count exact matches against each gradable question's correct option.
///
/// Ungraded and unanswered questions are skipped, but every question still
/// counts toward the denominator.
pub fn compute_knowledge_result(
    questions: &[Question],
    answers: &AnswerCollection,
) -> KnowledgeResult {
    let correct = questions
        .iter()
        .filter(|question| is_correct(question, answers))
        .count() as u32;
    let total = questions.len() as u32;
    let answered = questions
        .iter()
        .filter(|question| answers.get(question.id).is_some())
        .count();

    let band = classify_knowledge(percentage(correct, total));
    build_knowledge(correct, total, band, answered)
}

fn is_correct(question: &Question, answers: &AnswerCollection) -> bool {
    match (question.correct_option(), answers.get(question.id)) {
        (Some(expected), Some(given)) => expected == given,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::result::KnowledgeBand;

    fn abcd(id: u32, correct: Option<usize>) -> Question {
        Question::choice(id, format!("question {id}"), ["A", "B", "C", "D"], correct)
    }

    #[test]
    fn single_matching_answer_counts() {
        let questions = vec![abcd(1, Some(1))];
        let answers: AnswerCollection = [(1, "B")].into_iter().collect();
        let result = compute_knowledge_result(&questions, &answers);
        assert_eq!(result.correct(), 1);
        assert_eq!(result.percentage(), 100);
    }

    #[test]
    fn eight_of_ten_is_good() {
        let questions: Vec<Question> = (1..=10).map(|id| abcd(id, Some(0))).collect();
        let answers: AnswerCollection = (1..=10)
            .map(|id| (id, if id <= 8 { "A" } else { "C" }))
            .collect();
        let result = compute_knowledge_result(&questions, &answers);
        assert_eq!(result.correct(), 8);
        assert_eq!(result.total(), 10);
        assert_eq!(result.percentage(), 80);
        assert_eq!(result.band(), KnowledgeBand::Good);
    }

    #[test]
    fn unanswered_questions_count_against_respondent() {
        let questions: Vec<Question> = (1..=4).map(|id| abcd(id, Some(2))).collect();
        let answers: AnswerCollection = [(1, "C"), (2, "C")].into_iter().collect();
        let result = compute_knowledge_result(&questions, &answers);
        assert_eq!(result.correct(), 2);
        assert_eq!(result.percentage(), 50);
        assert_eq!(result.band(), KnowledgeBand::Poor);
        assert!(result.is_partial());
    }

    #[test]
    fn ungraded_question_stays_in_denominator() {
        let questions = vec![
            abcd(1, Some(0)),
            abcd(2, Some(0)),
            abcd(3, None),
            abcd(4, Some(0)),
        ];
        let answers: AnswerCollection =
            [(1, "A"), (2, "A"), (3, "A"), (4, "A")].into_iter().collect();
        let result = compute_knowledge_result(&questions, &answers);
        assert_eq!(result.correct(), 3);
        assert_eq!(result.total(), 4);
        assert_eq!(result.percentage(), 75);
        assert_eq!(result.band(), KnowledgeBand::Adequate);
    }

    #[test]
    fn match_is_exact() {
        let questions = vec![abcd(1, Some(1))];
        let answers: AnswerCollection = [(1, "b")].into_iter().collect();
        assert_eq!(compute_knowledge_result(&questions, &answers).correct(), 0);
    }

    #[test]
    fn empty_quiz_is_poor_with_zero_percentage() {
        let result = compute_knowledge_result(&[], &AnswerCollection::new());
        assert_eq!(result.percentage(), 0);
        assert_eq!(result.band(), KnowledgeBand::Poor);
    }

    #[test]
    fn out_of_range_correct_index_is_skipped_but_counted() {
        let questions = vec![
            Question::choice(1, "a", ["A", "B"], Some(7)),
            Question::choice(2, "b", ["A", "B"], Some(0)),
        ];
        let answers: AnswerCollection = [(1, "A"), (2, "A")].into_iter().collect();
        let result = compute_knowledge_result(&questions, &answers);
        assert_eq!(result.correct(), 1);
        assert_eq!(result.total(), 2);
        assert_eq!(result.percentage(), 50);
        assert_eq!(result.band(), KnowledgeBand::Poor);
    }
}
