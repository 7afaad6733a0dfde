use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "faiscism",
    version,
    about = "Personality quiz scoring, state and result-permutation engine"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Project root holding faiscism.toml, content and saved state
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack answer indices into a URL-safe token
    Encode(EncodeCommand),
    /// Unpack an answer token (malformed tokens yield [])
    Decode(DecodeCommand),
    /// Reduce raw dimension scores to a result code and type
    Classify(ClassifyCommand),
    /// Show the result page for a path and code
    Result(ResultCommand),
    /// Look up result type metadata by key
    Meta(MetaCommand),
    /// List every result permutation for a path
    Permutations(PermutationsCommand),
    /// Write a result artifact for every permutation of every path
    Generate(GenerateCommand),
    /// Answer a path interactively
    Play(PlayCommand),
    /// Inspect or reset saved progress
    State(StateCommand),
    /// Lint question and result content
    Check,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct EncodeCommand {
    /// Answer indices, each below 4
    #[arg(required = true)]
    pub answers: Vec<u8>,
}

#[derive(Args)]
pub struct DecodeCommand {
    pub token: String,
}

#[derive(Args)]
pub struct ClassifyCommand {
    pub path: String,
    /// Dimension score as name=value; repeatable
    #[arg(long = "score", value_parser = parse_score)]
    pub scores: Vec<(String, i64)>,
}

#[derive(Args)]
pub struct ResultCommand {
    pub path: String,
    pub code: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct MetaCommand {
    pub key: String,
}

#[derive(Args)]
pub struct PermutationsCommand {
    pub path: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Output directory; defaults to site.output_dir
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Only generate these paths; repeatable
    #[arg(long = "path")]
    pub paths: Vec<String>,
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct PlayCommand {
    pub path: String,
    #[arg(long, conflicts_with = "restart")]
    pub resume: bool,
    #[arg(long)]
    pub restart: bool,
}

#[derive(Args)]
pub struct StateCommand {
    #[command(subcommand)]
    pub action: StateAction,
}

#[derive(Subcommand)]
pub enum StateAction {
    Show { path: String },
    Clear { path: String },
}

fn parse_score(raw: &str) -> Result<(String, i64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got {raw:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing dimension name in {raw:?}"));
    }
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid score in {raw:?}: {e}"))?;
    Ok((name.to_string(), value))
}
