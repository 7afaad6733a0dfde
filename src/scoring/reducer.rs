use crate::types::level::Level;
use crate::types::result_type::ResultType;
use crate::types::state::ScoreMap;

/// Per-dimension maximum when a level vector is scored at build time (high = 2).
pub const BUILD_MAX_PER_DIMENSION: u32 = 2;
/// Per-dimension maximum assumed for raw accumulated scores.
pub const RUNTIME_MAX_PER_DIMENSION: u32 = 3;

/// Exclusive upper bound of each band; anything at or above the last bound is a resister.
const BANDS: [(f64, ResultType); 5] = [
    (0.25, ResultType::Sleepwalker),
    (0.40, ResultType::Skeptic),
    (0.55, ResultType::Participant),
    (0.70, ResultType::Architect),
    (0.85, ResultType::Witness),
];

pub fn classify_ratio(ratio: f64) -> ResultType {
    BANDS
        .iter()
        .find(|(upper, _)| ratio < *upper)
        .map_or(ResultType::Resister, |(_, kind)| *kind)
}

/// `sum(scores) / (scores.len() * max_per_dimension)`, with an empty map scoring zero.
pub fn score_ratio(scores: &ScoreMap, max_per_dimension: u32) -> f64 {
    let denominator = scores.len() as f64 * f64::from(max_per_dimension);
    if denominator == 0.0 {
        return 0.0;
    }
    let total = scores.values().copied().fold(0i64, i64::saturating_add);
    total as f64 / denominator
}

pub fn reduce(scores: &ScoreMap, max_per_dimension: u32) -> ResultType {
    classify_ratio(score_ratio(scores, max_per_dimension))
}

pub fn reduce_runtime(scores: &ScoreMap) -> ResultType {
    reduce(scores, RUNTIME_MAX_PER_DIMENSION)
}

pub fn reduce_levels(levels: &[Level]) -> ResultType {
    let denominator = levels.len() as u32 * BUILD_MAX_PER_DIMENSION;
    if denominator == 0 {
        return classify_ratio(0.0);
    }
    let total: u32 = levels.iter().map(|level| level.points()).sum();
    classify_ratio(f64::from(total) / f64::from(denominator))
}
