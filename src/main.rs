//! reform CLI entry point.

mod cli;

use std::path::PathBuf;

use clap::Parser;
use cli::{Cli, Command};
use reform::pipeline::{self, OutputFormat, PipelineResult};
use reform_rewrite::{Composition, RewriteConfig, RuleSet};
use reform_syntax::Language;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Rules => list_rules(),
        Command::Rewrite {
            file,
            config,
            mode,
            language,
            rules,
            json,
        } => {
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Source
            };
            if let Err(e) = rewrite_file(file, config, mode, language, rules, format) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn list_rules() {
    for rule in RuleSet::builtin().iter() {
        let info = rule.info();
        let languages: Vec<String> = info.languages.iter().map(ToString::to_string).collect();
        println!(
            "{:>4}  {:<18} [{}]  {}",
            info.order,
            info.name,
            languages.join(", "),
            info.description
        );
    }
}

fn rewrite_file(
    path: PathBuf,
    config: Option<PathBuf>,
    mode: Option<Composition>,
    language: Option<Language>,
    rules: Vec<String>,
    format: OutputFormat,
) -> PipelineResult<()> {
    let mut config = match config {
        Some(config) => pipeline::load_config(config)?,
        None => RewriteConfig::default(),
    };
    if let Some(mode) = mode {
        config.composition = mode;
    }
    if let Some(language) = language {
        config.language = language;
    }
    if !rules.is_empty() {
        config.rules = Some(rules);
    }

    let (rendered, result) = pipeline::rewrite_file(&path, &config, format)?;
    tracing::info!(
        file = %path.display(),
        traversals = result.traversals,
        changes = result.total_changes,
        "rewrite finished"
    );
    for (rule, changes) in &result.changes_by_rule {
        tracing::info!(rule, changes, "rule applied");
    }

    println!("{rendered}");
    Ok(())
}
