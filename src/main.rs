//! Reranker evaluation CLI: deduplicated precision/recall at full coverage.

use anyhow::Result;
use clap::Parser;
use rerank_eval::{eval, eval::ReportFormat, Config};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "evaluator")]
#[command(about = "Compare reranker scores against binary sentence labels")]
struct Args {
    /// Tab-separated label file: label<TAB>sentence<TAB>unused
    labels_file: PathBuf,

    /// One score per line, aligned with the label file
    score_file: PathBuf,

    /// "high" if higher scores rank first; any other value ranks lower scores first
    direction: String,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

fn main() -> Result<()> {
    // Exits with status 2 and usage on missing arguments.
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;

    // Logs go to stderr; stdout carries only the report.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level()),
    )
    .init();

    log::info!(
        "Evaluating {} against {} (direction: {})",
        args.score_file.display(),
        args.labels_file.display(),
        args.direction
    );

    let report = eval::run(&args.labels_file, &args.score_file, &args.direction, &config)?;

    log::debug!("precision and recall share the denominator `matched` and are always equal");

    println!("{}", report.render(args.format)?);
    Ok(())
}
