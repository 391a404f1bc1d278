use crate::engine::parse::{parse_score, ParsedScore, MAX_SCORE, MIN_SCORE};
use crate::error::{Result, ScoreError};
use crate::types::state::EvaluationState;
use tracing::{info, warn};

/// Normalizes a freshly typed entry the way the form does on each keystroke:
/// out-of-range numbers snap to the nearest bound, anything non-numeric is cleared.
pub fn sanitize_entry(raw: &str) -> String {
    match parse_score(raw) {
        ParsedScore::Empty => String::new(),
        ParsedScore::Value(value) if value < MIN_SCORE => {
            warn!(entry = raw, "score below 0, clamped to 0");
            "0".to_string()
        }
        ParsedScore::Value(value) if value > MAX_SCORE => {
            warn!(entry = raw, "score above 100, clamped to 100");
            "100".to_string()
        }
        ParsedScore::Value(_) => raw.trim().to_string(),
        ParsedScore::Invalid => {
            warn!(entry = raw, "non-numeric score cleared");
            String::new()
        }
    }
}

/// Target of a single edit: `key` or `key/sub-item`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRef {
    Category(String),
    SubItem { category: String, item: String },
}

impl FieldRef {
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        match text.split_once('/') {
            Some((category, item)) => {
                let (category, item) = (category.trim(), item.trim());
                if category.is_empty() || item.is_empty() {
                    return Err(ScoreError::MalformedEdit(format!(
                        "expected <category>/<sub-item>, got '{text}'"
                    )));
                }
                Ok(Self::SubItem {
                    category: category.to_string(),
                    item: item.to_string(),
                })
            }
            None if text.is_empty() => Err(ScoreError::MalformedEdit(
                "empty field reference".to_string(),
            )),
            None => Ok(Self::Category(text.to_string())),
        }
    }
}

/// Edits collected from the command line, applied in a fixed order:
/// not-applicable toggles, then scores, then unchecks.
#[derive(Debug, Default)]
pub struct Edits<'a> {
    pub inactive: &'a [String],
    pub set: &'a [String],
    pub uncheck: &'a [String],
}

pub fn apply_edits(state: &mut EvaluationState, edits: &Edits<'_>) -> Result<()> {
    for key in edits.inactive {
        state.set_active(key.trim(), false)?;
        info!(category = key.as_str(), "marked not applicable");
    }

    for assignment in edits.set {
        let (target, value) = assignment.split_once('=').ok_or_else(|| {
            ScoreError::MalformedEdit(format!("expected <field>=<score>, got '{assignment}'"))
        })?;
        let value = sanitize_entry(value);
        match FieldRef::parse(target)? {
            FieldRef::Category(key) => state.set_score(&key, &value)?,
            FieldRef::SubItem { category, item } => {
                state.set_sub_item(&category, &item, true, Some(&value))?
            }
        }
    }

    for target in edits.uncheck {
        match FieldRef::parse(target)? {
            FieldRef::SubItem { category, item } => {
                state.set_sub_item(&category, &item, false, None)?
            }
            FieldRef::Category(key) => {
                return Err(ScoreError::MalformedEdit(format!(
                    "--uncheck expects <category>/<sub-item>, got '{key}'"
                )))
            }
        }
    }

    Ok(())
}
