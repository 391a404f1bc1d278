pub mod parse;

use crate::error::{Result, ScoreError};
use crate::types::catalog::{CategoryDefinition, CategoryKind};
use crate::types::scoring::{CategoryScore, Score, ScoreResult};
use crate::types::state::{CategoryState, EvaluationState};
use parse::{clamp_score, parse_score, ParsedScore};
use tracing::debug;

/// Weighted score over the active categories, rescaled to 0-100.
///
/// Out-of-range entries are clamped. Any non-numeric entry rejects the whole
/// computation with [`ScoreError::InvalidInput`].
pub fn compute(catalog: &[CategoryDefinition], state: &EvaluationState) -> Result<ScoreResult> {
    let fresh = CategoryState::default();
    let mut raw_weighted_score: Score = 0.0;
    let mut effective_weight_base: u32 = 0;
    let mut invalid_fields = Vec::new();
    let mut categories = Vec::with_capacity(catalog.len());

    for definition in catalog {
        let entry = state.category(definition.key).unwrap_or(&fresh);
        if !entry.active {
            debug!(category = definition.key, "not applicable, skipped");
            categories.push(CategoryScore {
                key: definition.key,
                display_name: definition.display_name,
                max_weight: definition.max_weight,
                active: false,
                sub_score: 0.0,
                contribution: 0.0,
            });
            continue;
        }

        effective_weight_base += definition.max_weight;
        let sub_score = match definition.kind {
            CategoryKind::Simple => {
                field_value(entry.score_text(), definition.key, &mut invalid_fields)
            }
            CategoryKind::Composite => {
                composite_sub_score(definition, entry, &mut invalid_fields)
            }
        };
        let sub_score = clamp_score(sub_score);
        let contribution = (sub_score / 100.0) * Score::from(definition.max_weight);
        raw_weighted_score += contribution;
        debug!(
            category = definition.key,
            sub_score, contribution, "category scored"
        );

        categories.push(CategoryScore {
            key: definition.key,
            display_name: definition.display_name,
            max_weight: definition.max_weight,
            active: true,
            sub_score,
            contribution,
        });
    }

    if !invalid_fields.is_empty() {
        return Err(ScoreError::invalid_input(invalid_fields));
    }

    let final_score = if effective_weight_base == 0 {
        0.0
    } else {
        (raw_weighted_score / Score::from(effective_weight_base)) * 100.0
    };

    Ok(ScoreResult {
        final_score,
        raw_weighted_score,
        effective_weight_base,
        invalid_input_count: 0,
        categories,
    })
}

fn composite_sub_score(
    definition: &CategoryDefinition,
    entry: &CategoryState,
    invalid_fields: &mut Vec<String>,
) -> Score {
    let mut sum: Score = 0.0;
    let mut checked = 0usize;
    for name in definition.sub_item_names {
        let Some(item) = entry.sub_items.get(*name).filter(|item| item.checked) else {
            continue;
        };
        let label = format!("{}/{}", definition.key, name);
        sum += field_value(&item.score, &label, invalid_fields);
        checked += 1;
    }

    if checked == 0 {
        0.0
    } else {
        sum / checked as Score
    }
}

fn field_value(text: &str, label: &str, invalid_fields: &mut Vec<String>) -> Score {
    let parsed = parse_score(text);
    if parsed == ParsedScore::Invalid {
        invalid_fields.push(label.to_string());
    }
    parsed.value_or_zero()
}
