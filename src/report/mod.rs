pub mod json;
pub mod md;

use crate::error::ScreenError;
use crate::types::report::{HistoryReport, ScoreReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_score(report: &ScoreReport, format: OutputFormat) -> Result<String, ScreenError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScreenError::Json),
        OutputFormat::Md => Ok(md::score_markdown(report)),
    }
}

pub fn render_history(report: &HistoryReport, format: OutputFormat) -> Result<String, ScreenError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScreenError::Json),
        OutputFormat::Md => Ok(md::history_markdown(report)),
    }
}
