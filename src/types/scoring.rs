use crate::types::catalog::FULL_MARKS;
use serde::Serialize;

pub type Score = f64;

pub const EXCELLENT_THRESHOLD: Score = 80.0;
pub const PASS_THRESHOLD: Score = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyTier {
    Excellent,
    Pass,
    Fail,
}

impl SafetyTier {
    pub fn from_score(score: Score) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if score >= PASS_THRESHOLD {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "优良",
            Self::Pass => "合格",
            Self::Fail => "不合格",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub key: &'static str,
    pub display_name: &'static str,
    pub max_weight: u32,
    pub active: bool,
    /// Clamped 0-100 sub-score; zero for not-applicable categories.
    pub sub_score: Score,
    pub contribution: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub final_score: Score,
    pub raw_weighted_score: Score,
    pub effective_weight_base: u32,
    pub invalid_input_count: usize,
    pub categories: Vec<CategoryScore>,
}

impl ScoreResult {
    /// Weight removed by categories marked not-applicable.
    pub fn deducted_weight(&self) -> u32 {
        FULL_MARKS.saturating_sub(self.effective_weight_base)
    }

    pub fn conversion_factor(&self) -> Score {
        Score::from(self.effective_weight_base) / Score::from(FULL_MARKS)
    }

    pub fn tier(&self) -> SafetyTier {
        SafetyTier::from_score(self.final_score)
    }
}
