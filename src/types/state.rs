use crate::error::{Result, ScoreError};
use crate::types::catalog::{find_category, CategoryDefinition, CategoryKind};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// What the user has entered for one inspection session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationState {
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryState {
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_score"
    )]
    pub score: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sub_items: BTreeMap<String, SubItemState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubItemState {
    #[serde(default)]
    pub checked: bool,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: String,
}

fn default_active() -> bool {
    true
}

impl Default for CategoryState {
    fn default() -> Self {
        Self {
            active: true,
            score: None,
            sub_items: BTreeMap::new(),
        }
    }
}

impl CategoryState {
    fn fresh(definition: &CategoryDefinition) -> Self {
        match definition.kind {
            CategoryKind::Simple => Self {
                score: Some(String::new()),
                ..Self::default()
            },
            CategoryKind::Composite => Self {
                sub_items: definition
                    .sub_item_names
                    .iter()
                    .map(|name| (name.to_string(), SubItemState::default()))
                    .collect(),
                ..Self::default()
            },
        }
    }

    pub fn score_text(&self) -> &str {
        self.score.as_deref().unwrap_or_default()
    }
}

/// Sheet scores may be typed as TOML numbers; keep them as their decimal text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<RawScore> for String {
    fn from(raw: RawScore) -> Self {
        match raw {
            RawScore::Text(text) => text,
            RawScore::Integer(value) => value.to_string(),
            RawScore::Float(value) => value.to_string(),
        }
    }
}

fn deserialize_score<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawScore::deserialize(deserializer).map(String::from)
}

fn deserialize_optional_score<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawScore>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

/// Fresh state: every category active, every score empty, every sub-item unchecked.
pub fn reset(catalog: &[CategoryDefinition]) -> EvaluationState {
    EvaluationState {
        categories: catalog
            .iter()
            .map(|definition| (definition.key.to_string(), CategoryState::fresh(definition)))
            .collect(),
    }
}

impl EvaluationState {
    pub fn category(&self, key: &str) -> Option<&CategoryState> {
        self.categories.get(key)
    }

    /// Rejects sheets that do not fit the catalog.
    pub fn validate(&self) -> Result<()> {
        for (key, entry) in &self.categories {
            let definition =
                find_category(key).ok_or_else(|| ScoreError::UnknownCategory(key.clone()))?;
            match definition.kind {
                CategoryKind::Simple => {
                    if !entry.sub_items.is_empty() {
                        return Err(ScoreError::KindMismatch(format!(
                            "{key} is scored directly and has no sub-items"
                        )));
                    }
                }
                CategoryKind::Composite => {
                    if entry.score.is_some() {
                        return Err(ScoreError::KindMismatch(format!(
                            "{key} is scored through its sub-items, not a direct score"
                        )));
                    }
                    if let Some(item) = entry
                        .sub_items
                        .keys()
                        .find(|item| !definition.has_sub_item(item))
                    {
                        return Err(ScoreError::UnknownSubItem {
                            category: key.clone(),
                            item: item.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn set_active(&mut self, key: &str, active: bool) -> Result<()> {
        find_category(key).ok_or_else(|| ScoreError::UnknownCategory(key.to_string()))?;
        self.categories.entry(key.to_string()).or_default().active = active;
        Ok(())
    }

    pub fn set_score(&mut self, key: &str, score: &str) -> Result<()> {
        let definition =
            find_category(key).ok_or_else(|| ScoreError::UnknownCategory(key.to_string()))?;
        if definition.kind == CategoryKind::Composite {
            return Err(ScoreError::KindMismatch(format!(
                "{key} is scored through its sub-items; use {key}/<sub-item>=<score>"
            )));
        }
        self.categories.entry(key.to_string()).or_default().score = Some(score.to_string());
        Ok(())
    }

    /// Checks or unchecks a sub-item; a given score replaces the stored one.
    pub fn set_sub_item(
        &mut self,
        key: &str,
        item: &str,
        checked: bool,
        score: Option<&str>,
    ) -> Result<()> {
        let definition =
            find_category(key).ok_or_else(|| ScoreError::UnknownCategory(key.to_string()))?;
        if definition.kind == CategoryKind::Simple {
            return Err(ScoreError::KindMismatch(format!(
                "{key} is scored directly and has no sub-items"
            )));
        }
        if !definition.has_sub_item(item) {
            return Err(ScoreError::UnknownSubItem {
                category: key.to_string(),
                item: item.to_string(),
            });
        }

        let entry = self
            .categories
            .entry(key.to_string())
            .or_default()
            .sub_items
            .entry(item.to_string())
            .or_default();
        entry.checked = checked;
        if let Some(score) = score {
            entry.score = score.to_string();
        }
        Ok(())
    }
}
