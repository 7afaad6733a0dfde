pub mod json;
pub mod md;

use crate::error::QuizError;
use crate::scoring::reducer;
use crate::types::config::{PathConfig, QuizConfig};
use crate::types::level::{Level, ResultCode};
use crate::types::report::{DimensionView, PathLink, ResultView};
use crate::types::result_type::ResultCatalog;
use crate::urls;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(view: &ResultView, format: OutputFormat) -> Result<String, QuizError> {
    match format {
        OutputFormat::Json => json::to_json(view).map_err(QuizError::Json),
        OutputFormat::Md => Ok(md::to_markdown(view)),
    }
}

/// The result page for `code` on `path`. The result type is derived from the
/// level vector, so every visitor landing on the same code sees the same page.
pub fn build_view(
    config: &QuizConfig,
    path: &PathConfig,
    code: &ResultCode,
    catalog: &ResultCatalog,
    answer_token: Option<String>,
) -> ResultView {
    let levels = code.levels();
    let result_type = reducer::reduce_levels(&levels);
    let base = config.base_path();

    let dimensions = path
        .dimensions
        .iter()
        .enumerate()
        .map(|(index, name)| DimensionView {
            name: name.clone(),
            label: path.label(index).to_string(),
            level: levels.get(index).copied().unwrap_or(Level::Low),
        })
        .collect();

    let other_paths = config
        .paths
        .iter()
        .filter(|other| other.id != path.id)
        .map(|other| PathLink {
            id: other.id.clone(),
            name: other.name.clone(),
            address: urls::path_start_url(&base, &other.id),
        })
        .collect();

    ResultView {
        path: path.id.clone(),
        path_name: path.name.clone(),
        code: code.clone(),
        address: urls::result_url(&base, &path.id, code),
        result_type,
        meta: catalog.meta(result_type),
        dimensions,
        answer_token,
        other_paths,
    }
}
