use crate::types::report::{HistoryReport, ScoreReport};
use crate::types::result::AssessmentResult;

pub fn score_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", report.title));
    output.push_str(&format!("Assessment: {}\n\n", report.assessment_id));
    output.push_str("## Result\n\n");

    match &report.result {
        AssessmentResult::Stress(result) => {
            output.push_str(&format!(
                "- band: {}\n- score: {} / {}\n- answered: {} of {}\n",
                result.band(),
                result.score(),
                result.max_score(),
                result.answered(),
                report.question_count
            ));
        }
        AssessmentResult::Knowledge(result) => {
            output.push_str(&format!(
                "- band: {}\n- correct: {} / {}\n- percentage: {}%\n- answered: {} of {}\n",
                result.band(),
                result.correct(),
                result.total(),
                result.percentage(),
                result.answered(),
                report.question_count
            ));
        }
    }

    if report.result.is_partial() {
        output.push_str("\nSome questions were left unanswered.\n");
    }

    if let Some(saved) = &report.saved {
        output.push_str(&format!(
            "\nSaved for {} at {}\n",
            saved.respondent,
            saved.recorded_at.to_rfc3339()
        ));
    }

    output
}

pub fn history_markdown(report: &HistoryReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# History for {}\n\n", report.respondent));
    if report.records.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| recorded | assessment | band | score |\n");
    output.push_str("|---|---|---|---|\n");
    for record in &report.records {
        let score = match record.percentage {
            Some(percentage) => format!("{}/{} ({}%)", record.score, record.max_score, percentage),
            None => format!("{}/{}", record.score, record.max_score),
        };
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            record.recorded_at.format("%Y-%m-%d %H:%M"),
            record.assessment_id,
            record.band,
            score
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::store::ResultRecord;
    use crate::scoring::compute_stress_result;
    use crate::types::answers::AnswerCollection;
    use crate::types::assessment::{AssessmentDefinition, AssessmentKind, Question};
    use crate::types::report::ScoreReport;

    fn stress_definition() -> AssessmentDefinition {
        AssessmentDefinition {
            id: "caregiver-stress".to_string(),
            title: "Caregiver Stress".to_string(),
            kind: AssessmentKind::Stress,
            description: None,
            questions: (1..=4).map(|id| Question::rating(id, "item")).collect(),
        }
    }

    #[test]
    fn markdown_score_report_contains_sections() {
        let definition = stress_definition();
        let answers: AnswerCollection = [(1, "2"), (2, "3")].into_iter().collect();
        let result = compute_stress_result(&answers, definition.question_count());
        let report = ScoreReport::new(&definition, result.into());

        let rendered = score_markdown(&report);
        assert!(rendered.contains("# Caregiver Stress"));
        assert!(rendered.contains("- band: LOW"));
        assert!(rendered.contains("- score: 5 / 8"));
        assert!(rendered.contains("left unanswered"));
    }

    #[test]
    fn markdown_history_lists_rows() {
        let definition = stress_definition();
        let answers: AnswerCollection = (1..=4).map(|id| (id, "4")).collect();
        let result = compute_stress_result(&answers, 4).into();
        let record = ResultRecord::new("jo", &definition.id, &result, &answers);

        let rendered = history_markdown(&HistoryReport {
            respondent: "jo".to_string(),
            records: vec![record],
        });
        assert!(rendered.contains("# History for jo"));
        assert!(rendered.contains("| caregiver-stress | MEDIUM | 16/16 |"));
    }

    #[test]
    fn markdown_history_empty() {
        let rendered = history_markdown(&HistoryReport {
            respondent: "jo".to_string(),
            records: Vec::new(),
        });
        assert!(rendered.contains("- none"));
    }
}
