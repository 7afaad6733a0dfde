use crate::scoring::reducer;
use crate::types::level::{Level, ResultCode};
use crate::types::result_type::ResultType;
use crate::urls;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPermutation {
    pub path: String,
    pub levels: Vec<Level>,
    pub code: ResultCode,
    pub permalink: String,
    pub result_type: ResultType,
}

/// Every level assignment for `dimension_count` dimensions, first dimension most
/// significant: `000, 001, 002, 010, ... 222` for three dimensions.
pub fn generate_permutations(path_id: &str, dimension_count: usize) -> Vec<ResultPermutation> {
    let radix = Level::ALL.len();
    let total = radix.pow(dimension_count as u32);

    (0..total)
        .map(|index| {
            let levels = (0..dimension_count)
                .rev()
                .map(|position| Level::ALL[(index / radix.pow(position as u32)) % radix])
                .collect::<Vec<_>>();
            let code = ResultCode::from_levels(&levels);
            ResultPermutation {
                path: path_id.to_string(),
                permalink: urls::result_permalink(path_id, &code),
                result_type: reducer::reduce_levels(&levels),
                levels,
                code,
            }
        })
        .collect()
}
