pub mod level;
pub mod reducer;

use crate::types::config::PathConfig;
use crate::types::level::{Level, ResultCode};
use crate::types::result_type::ResultType;
use crate::types::state::ScoreMap;

/// Everything derived from one set of raw accumulated scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub levels: Vec<Level>,
    pub code: ResultCode,
    pub result_type: ResultType,
}

pub fn classify(path: &PathConfig, scores: &ScoreMap) -> Classification {
    let unknown = scores
        .keys()
        .filter(|dimension| !path.dimensions.contains(dimension))
        .cloned()
        .collect::<Vec<_>>();
    if !unknown.is_empty() {
        tracing::warn!(path = %path.id, ?unknown, "scores reference dimensions outside the path");
    }

    let levels = level::levels_for(&path.dimensions, scores);
    let code = ResultCode::from_levels(&levels);
    let result_type = reducer::reduce_runtime(scores);
    Classification {
        levels,
        code,
        result_type,
    }
}
