use crate::types::level::{Level, ResultCode};
use crate::types::state::ScoreMap;

const LOW_CEILING: i64 = 3;
const MEDIUM_CEILING: i64 = 6;

pub fn level_for_score(score: i64) -> Level {
    if score <= LOW_CEILING {
        Level::Low
    } else if score <= MEDIUM_CEILING {
        Level::Medium
    } else {
        Level::High
    }
}

/// Levels for `dimensions` in order; a dimension with no score yet counts as zero.
pub fn levels_for(dimensions: &[String], scores: &ScoreMap) -> Vec<Level> {
    dimensions
        .iter()
        .map(|dimension| level_for_score(scores.get(dimension).copied().unwrap_or(0)))
        .collect()
}

pub fn result_code(dimensions: &[String], scores: &ScoreMap) -> ResultCode {
    ResultCode::from_levels(&levels_for(dimensions, scores))
}
