use crate::types::level::ResultCode;

pub fn path_start_url(base: &str, path_id: &str) -> String {
    format!("{base}{path_id}/")
}

pub fn question_url(base: &str, path_id: &str, question: u32) -> String {
    format!("{base}{path_id}/{question}/")
}

pub fn result_url(base: &str, path_id: &str, code: &ResultCode) -> String {
    format!("{base}{path_id}/result/{code}/")
}

/// Site-relative result address, independent of any configured base path.
pub fn result_permalink(path_id: &str, code: &ResultCode) -> String {
    result_url("/", path_id, code)
}
