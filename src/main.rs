//! azdo-annotator - Azure DevOps identity annotations for catalog entities
//!
//! Command-line front end: loads configuration, runs the annotator over an
//! entity read from a file or stdin, and prints the result.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

/// Main entry point for the azdo-annotator CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
