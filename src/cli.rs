//! Command-line interface for the reform driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reform_rewrite::Composition;
use reform_syntax::Language;

#[derive(Parser)]
#[command(name = "reform")]
#[command(about = "Rewrite syntax trees into helper-call conventions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in rules in execution order
    Rules,
    /// Rewrite a JSON-serialized tree and print the result
    Rewrite {
        /// Path to the tree file
        file: PathBuf,

        /// JSON file with a rewrite configuration; flags override its fields
        #[arg(long)]
        config: Option<PathBuf>,

        /// How rules are combined into traversals (cascading or isolated)
        #[arg(long)]
        mode: Option<Composition>,

        /// Language of the tree
        #[arg(long)]
        language: Option<Language>,

        /// Run only this rule; repeat to run several
        #[arg(long = "rule", value_name = "NAME")]
        rules: Vec<String>,

        /// Print the rewritten tree as JSON instead of source form
        #[arg(long)]
        json: bool,
    },
}
