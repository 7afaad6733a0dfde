mod cli;
mod codec;
mod config;
mod content;
mod error;
mod generator;
mod navigation;
mod play;
mod report;
mod scoring;
mod store;
mod telemetry;
mod types;
mod urls;

use crate::error::QuizError;
use crate::store::{FileBackend, PathStateStore};
use crate::types::config::QuizConfig;
use crate::types::level::ResultCode;
use crate::types::state::ScoreMap;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, QuizError> {
    let cli = cli::Cli::parse();
    telemetry::init_tracing(cli.verbose, cli.quiet);

    if !cli.root.exists() {
        return Err(QuizError::PathNotFound(cli.root.display().to_string()));
    }
    let cfg = config::load_config(&cli.root)?;
    cfg.validate()?;
    let content_dir = config::resolve_path(&cli.root, cfg.content_dir());

    match cli.command {
        cli::Commands::Encode(cmd) => {
            println!("{}", codec::encode(&cmd.answers)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Decode(cmd) => {
            println!("{}", serde_json::to_string(&codec::decode(&cmd.token))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Classify(cmd) => {
            let path = cfg.path(&cmd.path)?;
            let mut scores = ScoreMap::new();
            for (dimension, value) in cmd.scores {
                let total = scores.entry(dimension).or_insert(0);
                *total = total.saturating_add(value);
            }
            let classification = scoring::classify(path, &scores);
            let levels = classification
                .levels
                .iter()
                .map(|level| level.as_str())
                .collect::<Vec<_>>();
            println!("code: {}", classification.code);
            println!("levels: {}", levels.join(", "));
            println!("result_type: {}", classification.result_type.key());
            println!(
                "address: {}",
                urls::result_url(&cfg.base_path(), &path.id, &classification.code)
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Result(cmd) => {
            let path = cfg.path(&cmd.path)?;
            let code = ResultCode::parse(&cmd.code)
                .filter(|code| code.as_str().len() == path.dimensions.len())
                .ok_or_else(|| QuizError::InvalidCode(cmd.code.clone()))?;
            let catalog = content::load_catalog(&content_dir)?;
            let view = report::build_view(&cfg, path, &code, &catalog, None);
            println!("{}", report::render(&view, output_format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Meta(cmd) => {
            let catalog = content::load_catalog(&content_dir)?;
            let (kind, meta) = catalog.lookup(&cmd.key);
            if kind.key() != cmd.key {
                tracing::warn!(key = %cmd.key, fallback = kind.key(), "unknown result type key");
            }
            println!("type: {}", kind.key());
            println!("name: {}", meta.name);
            println!("summary: {}", meta.summary);
            println!("hook: {}", meta.hook);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Permutations(cmd) => {
            let path = cfg.path(&cmd.path)?;
            let entries =
                generator::permutations::generate_permutations(&path.id, path.dimensions.len());
            match cmd.format {
                cli::ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
                cli::ReportFormat::Md => {
                    for entry in &entries {
                        println!(
                            "- {} {} {}",
                            entry.code,
                            entry.result_type.key(),
                            entry.permalink
                        );
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Generate(cmd) => {
            generator::writer::execute_generate(&cli.root, &cfg, &cmd)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Play(cmd) => {
            let path_cfg = cfg.path(&cmd.path)?;
            let path = content::load_path(&content_dir, path_cfg, cfg.total_questions())?;
            let catalog = content::load_catalog(&content_dir)?;
            let mut nav = navigation::Navigator::new(
                state_store(&cli.root, &cfg),
                path,
                cfg.total_questions(),
                cfg.base_path(),
            );
            let choice = if cmd.resume {
                play::StartChoice::Resume
            } else if cmd.restart {
                play::StartChoice::Restart
            } else {
                play::StartChoice::Ask
            };

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let end = play::run_session(
                &mut nav,
                &cfg,
                &catalog,
                choice,
                &mut stdin.lock(),
                &mut stdout.lock(),
            )?;
            tracing::info!(path = %cmd.path, ?end, "session finished");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::State(cmd) => match cmd.action {
            cli::StateAction::Show { path } => {
                cfg.path(&path)?;
                let state = state_store(&cli.root, &cfg).get(&path);
                println!("{}", serde_json::to_string_pretty(&state)?);
                Ok(exit_code::SUCCESS)
            }
            cli::StateAction::Clear { path } => {
                cfg.path(&path)?;
                state_store(&cli.root, &cfg).clear(&path);
                println!("state cleared: {path}");
                Ok(exit_code::SUCCESS)
            }
        },
        cli::Commands::Check => {
            let findings = content::lint::lint_findings(&content_dir, &cfg);

            if findings.is_empty() {
                println!("check: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
                if let Some(file) = &finding.file {
                    println!("  file: {file}");
                }
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn state_store(root: &Path, cfg: &QuizConfig) -> PathStateStore<FileBackend> {
    PathStateStore::new(FileBackend::new(config::resolve_path(
        root,
        cfg.state_file(),
    )))
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
