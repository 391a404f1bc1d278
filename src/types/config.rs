use crate::error::ScoreError;
use crate::report::OutputFormat;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorerConfig {
    pub project: Option<ProjectConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    pub name: Option<String>,
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    pub format: Option<OutputFormat>,
}

impl ScorerConfig {
    pub fn project_name(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|project| project.name.as_deref())
    }

    pub fn organization(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|project| project.organization.as_deref())
    }

    pub fn report_format(&self) -> Option<OutputFormat> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if let Some(project) = &self.project {
            for (field, value) in [
                ("project.name", &project.name),
                ("project.organization", &project.organization),
            ] {
                if value.as_deref().is_some_and(|text| text.trim().is_empty()) {
                    return Err(ScoreError::ConfigParse(format!(
                        "{field} must not be blank when set"
                    )));
                }
            }
        }
        Ok(())
    }
}
