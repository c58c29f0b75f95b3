//! Rewrite pipeline.
//!
//! ```text
//! tree.json ─► load_tree ─► Node
//!                            │
//! RewriteConfig ─► Engine ─► run ─► ApplyResult
//!                                      │
//!                                      ▼
//!                              render (source | json)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use derive_more::{Display, Error, From};
use reform_rewrite::{ApplyResult, Engine, RewriteConfig, RewriteError};
use reform_syntax::Node;

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Display, Error, From)]
pub enum PipelineError {
    #[display("cannot read `{}`: {source}", path.display())]
    #[from(skip)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[display("invalid JSON: {_0}")]
    Json(serde_json::Error),

    #[display("{_0}")]
    Rewrite(RewriteError),
}

/// How a rewritten tree is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// C#-like source form.
    #[default]
    Source,
    /// Pretty-printed serde JSON, loadable again with [`parse_tree`].
    Json,
}

fn read(path: &Path) -> PipelineResult<String> {
    fs::read_to_string(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_tree(json: &str) -> PipelineResult<Node> {
    Ok(serde_json::from_str(json)?)
}

/// Read a serialized tree from a file.
pub fn load_tree(path: impl AsRef<Path>) -> PipelineResult<Node> {
    let path = path.as_ref();
    let root = parse_tree(&read(path)?)?;
    tracing::debug!(path = %path.display(), nodes = root.node_count(), "loaded tree");
    Ok(root)
}

/// Read a [`RewriteConfig`] stored as JSON. Missing fields take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> PipelineResult<RewriteConfig> {
    let path = path.as_ref();
    Ok(serde_json::from_str(&read(path)?)?)
}

/// Rewrite `root` with the built-in rules selected by `config`.
pub fn run(root: Node, config: &RewriteConfig) -> PipelineResult<ApplyResult> {
    let engine = Engine::from_config(config)?;
    tracing::debug!(
        language = %engine.language(),
        composition = %engine.composition(),
        rules = ?engine.rules().names(),
        "running engine"
    );
    Ok(engine.apply(root))
}

pub fn render(root: &Node, format: OutputFormat) -> PipelineResult<String> {
    match format {
        OutputFormat::Source => Ok(root.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(root)?),
    }
}

/// Load, rewrite and render in one go.
pub fn rewrite_file(
    path: impl AsRef<Path>,
    config: &RewriteConfig,
    format: OutputFormat,
) -> PipelineResult<(String, ApplyResult)> {
    let result = run(load_tree(path)?, config)?;
    let rendered = render(&result.root, format)?;
    Ok((rendered, result))
}
