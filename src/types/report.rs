use crate::types::level::{Level, ResultCode};
use crate::types::result_type::{ResultMeta, ResultType};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
    pub file: Option<String>,
}

/// What a result page shows for one path and code.
#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub path: String,
    pub path_name: String,
    pub code: ResultCode,
    pub address: String,
    pub result_type: ResultType,
    pub meta: ResultMeta,
    pub dimensions: Vec<DimensionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_token: Option<String>,
    pub other_paths: Vec<PathLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionView {
    pub name: String,
    pub label: String,
    pub level: Level,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathLink {
    pub id: String,
    pub name: String,
    pub address: String,
}
