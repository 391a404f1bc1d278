use crate::report::ReportContext;
use crate::types::scoring::{CategoryScore, SafetyTier, Score, ScoreResult};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization: Option<&'a str>,
    final_score: Score,
    tier: SafetyTier,
    tier_label: &'static str,
    raw_weighted_score: Score,
    effective_weight_base: u32,
    deducted_weight: u32,
    conversion_factor: Score,
    invalid_input_count: usize,
    categories: &'a [CategoryScore],
}

pub fn to_json(result: &ScoreResult, context: &ReportContext) -> Result<String, serde_json::Error> {
    let tier = result.tier();
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION"),
        generated_at: Utc::now().to_rfc3339(),
        project: context.project.as_deref(),
        organization: context.organization.as_deref(),
        final_score: result.final_score,
        tier,
        tier_label: tier.label(),
        raw_weighted_score: result.raw_weighted_score,
        effective_weight_base: result.effective_weight_base,
        deducted_weight: result.deducted_weight(),
        conversion_factor: result.conversion_factor(),
        invalid_input_count: result.invalid_input_count,
        categories: &result.categories,
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn json_report_contains_scores_and_derived_values() {
        let result = ScoreResult {
            final_score: 75.5,
            raw_weighted_score: 67.95,
            effective_weight_base: 90,
            invalid_input_count: 0,
            categories: vec![],
        };

        let rendered = to_json(&result, &ReportContext::default()).expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("json should parse");
        assert_eq!(value["final_score"], 75.5);
        assert_eq!(value["tier"], "pass");
        assert_eq!(value["tier_label"], "合格");
        assert_eq!(value["effective_weight_base"], 90);
        assert_eq!(value["deducted_weight"], 10);
        assert_eq!(value["conversion_factor"], 0.9);
        assert!(value["generated_at"].is_string());
        assert!(value.get("project").is_none());
    }
}
