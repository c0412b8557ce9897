//! Command implementations

mod annotate;
mod hosts;
mod parse;

pub use annotate::{AnnotateArgs, annotate};
pub use hosts::hosts;
pub use parse::parse;

use std::path::Path;

use anyhow::Context;
use azdo_annotator::Config;

/// Load configuration for a command
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    Config::load_or_default(path).context("failed to load azdo-annotator configuration")
}
