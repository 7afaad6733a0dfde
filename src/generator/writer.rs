use super::manifest::{self, PermutationManifest};
use super::permutations::generate_permutations;
use crate::cli::GenerateCommand;
use crate::config;
use crate::content;
use crate::error::{QuizError, Result};
use crate::report;
use crate::types::config::{PathConfig, QuizConfig};
use crate::types::level::ResultCode;
use std::fs;
use std::path::{Path, PathBuf};

pub const RESULT_PAGE_FILE: &str = "index.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeAction {
    Create,
    Modify,
    Unchanged,
}

impl ChangeAction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Modify => "modify",
            Self::Unchanged => "unchanged",
        }
    }
}

#[derive(Debug, Clone)]
struct PlannedChange {
    path: PathBuf,
    action: ChangeAction,
    content: String,
}

/// Files touched by one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub created: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub manifests: Vec<PathBuf>,
}

pub fn execute_generate(root: &Path, cfg: &QuizConfig, cmd: &GenerateCommand) -> Result<GenerateSummary> {
    let out_dir = cmd
        .out
        .clone()
        .unwrap_or_else(|| config::resolve_path(root, cfg.output_dir()));
    let content_dir = config::resolve_path(root, cfg.content_dir());
    let catalog = content::load_catalog(&content_dir)?;
    let selected = select_paths(cfg, &cmd.paths)?;

    let mut changes = Vec::new();
    let mut manifests = Vec::new();
    for path in &selected {
        let entries = generate_permutations(&path.id, path.dimensions.len());
        for entry in &entries {
            let view = report::build_view(cfg, path, &entry.code, &catalog, None);
            let rendered = report::json::to_json(&view)?;
            changes.push(plan_change(result_page_file(&out_dir, &path.id, &entry.code), rendered)?);
        }
        tracing::info!(path = %path.id, entries = entries.len(), "permutations generated");
        manifests.push(PermutationManifest::new(&path.id, entries));
    }

    print_scope_summary(&out_dir, &changes);
    let mut summary = GenerateSummary {
        created: count(&changes, ChangeAction::Create),
        modified: count(&changes, ChangeAction::Modify),
        unchanged: count(&changes, ChangeAction::Unchanged),
        manifests: Vec::new(),
    };

    if cmd.dry_run {
        println!("preview: no files were written");
        return Ok(summary);
    }

    apply_changes(&changes)?;
    for manifest in &manifests {
        let written = manifest::write_manifest(&out_dir, manifest)?;
        println!("manifest: {}", written.display());
        summary.manifests.push(written);
    }
    println!(
        "generate complete: wrote {} file(s), {} unchanged",
        summary.created + summary.modified,
        summary.unchanged
    );
    Ok(summary)
}

pub fn result_page_file(out_dir: &Path, path_id: &str, code: &ResultCode) -> PathBuf {
    out_dir
        .join(path_id)
        .join("result")
        .join(code.as_str())
        .join(RESULT_PAGE_FILE)
}

fn select_paths<'a>(cfg: &'a QuizConfig, requested: &[String]) -> Result<Vec<&'a PathConfig>> {
    if requested.is_empty() {
        return Ok(cfg.paths.iter().collect());
    }
    requested.iter().map(|id| cfg.path(id)).collect()
}

fn plan_change(path: PathBuf, content: String) -> Result<PlannedChange> {
    let action = if path.exists() {
        let existing = fs::read_to_string(&path).map_err(QuizError::Io)?;
        if existing == content {
            ChangeAction::Unchanged
        } else {
            ChangeAction::Modify
        }
    } else {
        ChangeAction::Create
    };
    Ok(PlannedChange {
        path,
        action,
        content,
    })
}

fn count(changes: &[PlannedChange], action: ChangeAction) -> usize {
    changes.iter().filter(|change| change.action == action).count()
}

fn print_scope_summary(root: &Path, changes: &[PlannedChange]) {
    println!(
        "scope: create={} modify={} unchanged={}",
        count(changes, ChangeAction::Create),
        count(changes, ChangeAction::Modify),
        count(changes, ChangeAction::Unchanged)
    );
    for change in changes
        .iter()
        .filter(|change| change.action != ChangeAction::Unchanged)
    {
        let display_path = change
            .path
            .strip_prefix(root)
            .unwrap_or(change.path.as_path())
            .display();
        println!("{}: {}", change.action.as_str(), display_path);
    }
}

fn apply_changes(changes: &[PlannedChange]) -> Result<()> {
    for change in changes
        .iter()
        .filter(|change| change.action != ChangeAction::Unchanged)
    {
        if let Some(parent) = change.path.parent() {
            fs::create_dir_all(parent).map_err(QuizError::Io)?;
        }
        fs::write(&change.path, &change.content).map_err(QuizError::Io)?;
    }
    Ok(())
}
