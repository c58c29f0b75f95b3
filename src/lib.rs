//! Driver for the reform rewrite engine.
//!
//! Loads serialized trees and configurations, runs the engine and renders
//! the result. The binary in `main.rs` is a thin shell over [`pipeline`].

pub mod pipeline;

pub use pipeline::{OutputFormat, PipelineError, PipelineResult};
