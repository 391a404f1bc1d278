use crate::report::ReportContext;
use crate::types::scoring::ScoreResult;

pub fn to_markdown(result: &ScoreResult, context: &ReportContext) -> String {
    let mut output = String::new();
    output.push_str("# JGJ59-2011 安全检查评分\n\n");
    if let Some(project) = &context.project {
        output.push_str(&format!("项目: {project}\n"));
    }
    if let Some(organization) = &context.organization {
        output.push_str(&format!("单位: {organization}\n"));
    }
    if context.project.is_some() || context.organization.is_some() {
        output.push('\n');
    }

    output.push_str("## 汇总\n\n");
    output.push_str(&format!(
        "- 最终得分: {:.2}\n- 安全等级: {}\n- 实得权重分: {:.2}\n- 有效满分基数: {}\n- 缺项扣除权重: {}\n- 换算系数: {:.3}\n\n",
        result.final_score,
        result.tier().label(),
        result.raw_weighted_score,
        result.effective_weight_base,
        result.deducted_weight(),
        result.conversion_factor()
    ));

    output.push_str("## 分项得分\n\n");
    if result.categories.is_empty() {
        output.push_str("- none\n");
    } else {
        for category in &result.categories {
            if category.active {
                output.push_str(&format!(
                    "- {} (满分 {}): {:.2} -> {:.2}\n",
                    category.display_name,
                    category.max_weight,
                    category.sub_score,
                    category.contribution
                ));
            } else {
                output.push_str(&format!(
                    "- {} (满分 {}): 缺项\n",
                    category.display_name, category.max_weight
                ));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::CategoryScore;

    fn sample() -> ScoreResult {
        ScoreResult {
            final_score: 85.0,
            raw_weighted_score: 12.75,
            effective_weight_base: 15,
            invalid_input_count: 0,
            categories: vec![
                CategoryScore {
                    key: "manage",
                    display_name: "安全管理",
                    max_weight: 10,
                    active: false,
                    sub_score: 0.0,
                    contribution: 0.0,
                },
                CategoryScore {
                    key: "civil",
                    display_name: "文明施工",
                    max_weight: 15,
                    active: true,
                    sub_score: 85.0,
                    contribution: 12.75,
                },
            ],
        }
    }

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&sample(), &ReportContext::default());
        assert!(rendered.contains("# JGJ59-2011 安全检查评分"));
        assert!(rendered.contains("## 汇总"));
        assert!(rendered.contains("## 分项得分"));
        assert!(rendered.contains("- 换算系数: 0.150"));
        assert!(rendered.contains("- 安全管理 (满分 10): 缺项"));
        assert!(rendered.contains("- 文明施工 (满分 15): 85.00 -> 12.75"));
        assert!(!rendered.contains("项目:"));
    }

    #[test]
    fn markdown_report_includes_configured_project() {
        let context = ReportContext {
            project: Some("滨湖新区二期".to_string()),
            organization: Some("安徽两淮建设技术中心".to_string()),
        };
        let rendered = to_markdown(&sample(), &context);
        assert!(rendered.contains("项目: 滨湖新区二期"));
        assert!(rendered.contains("单位: 安徽两淮建设技术中心"));
    }
}
