use std::path::Path;
use walkdir::WalkDir;

/// Path ids of every `<id>_questions.json` directly inside `content_dir`, sorted.
pub fn discover_question_files(content_dir: &Path) -> Vec<String> {
    let mut ids = WalkDir::new(content_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry
                .file_name()
                .to_str()
                .and_then(|name| name.strip_suffix(super::QUESTIONS_SUFFIX))
                .filter(|id| !id.is_empty())
                .map(str::to_string)
        })
        .collect::<Vec<_>>();
    ids.sort();
    ids
}
