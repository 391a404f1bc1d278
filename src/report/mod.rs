pub mod json;
pub mod md;
pub mod summary;

use crate::error::ScoreError;
use crate::types::scoring::ScoreResult;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Summary,
    Md,
    Json,
}

/// Who the evaluation is for; printed in report headers when configured.
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    pub project: Option<String>,
    pub organization: Option<String>,
}

pub fn render(
    result: &ScoreResult,
    context: &ReportContext,
    format: OutputFormat,
) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Summary => Ok(summary::to_summary(result)),
        OutputFormat::Md => Ok(md::to_markdown(result, context)),
        OutputFormat::Json => json::to_json(result, context).map_err(ScoreError::Json),
    }
}
