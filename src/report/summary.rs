use crate::types::scoring::ScoreResult;

/// Plain-text result for copying or exporting.
pub fn to_summary(result: &ScoreResult) -> String {
    format!(
        "JGJ59-2011安全评分结果：\n最终得分：{:.2}分\n安全等级：{}\n实得权重分：{:.2}\n有效满分基数：{}\n缺项扣除权重：{}",
        result.final_score,
        result.tier().label(),
        result.raw_weighted_score,
        result.effective_weight_base,
        result.deducted_weight()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_scores_and_tier() {
        let result = ScoreResult {
            final_score: 80.0,
            raw_weighted_score: 72.0,
            effective_weight_base: 90,
            invalid_input_count: 0,
            categories: vec![],
        };

        assert_eq!(
            to_summary(&result),
            "JGJ59-2011安全评分结果：\n最终得分：80.00分\n安全等级：优良\n实得权重分：72.00\n有效满分基数：90\n缺项扣除权重：10"
        );
    }

    #[test]
    fn summary_rounds_to_two_decimals() {
        let result = ScoreResult {
            final_score: 69.996,
            raw_weighted_score: 62.9964,
            effective_weight_base: 90,
            invalid_input_count: 0,
            categories: vec![],
        };

        let rendered = to_summary(&result);
        assert!(rendered.contains("最终得分：70.00分"));
        // tier follows the unrounded score
        assert!(rendered.contains("安全等级：不合格"));
        assert!(rendered.contains("实得权重分：63.00"));
    }
}
