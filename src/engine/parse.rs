use crate::types::scoring::Score;

pub const MIN_SCORE: Score = 0.0;
pub const MAX_SCORE: Score = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedScore {
    Empty,
    Value(Score),
    Invalid,
}

impl ParsedScore {
    /// Empty and invalid entries both count as zero.
    pub fn value_or_zero(self) -> Score {
        match self {
            Self::Value(value) => value,
            Self::Empty | Self::Invalid => 0.0,
        }
    }
}

pub fn parse_score(text: &str) -> ParsedScore {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParsedScore::Empty;
    }
    match trimmed.parse::<Score>() {
        Ok(value) if value.is_finite() => ParsedScore::Value(value),
        _ => ParsedScore::Invalid,
    }
}

pub fn clamp_score(value: Score) -> Score {
    value.clamp(MIN_SCORE, MAX_SCORE)
}
