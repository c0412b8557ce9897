//! azdo-annotator - Azure DevOps identity annotations for catalog entities
//!
//! Inspects where a catalog entity was read from and, when that location is
//! a repository on a recognized Azure DevOps host (cloud or on-premises),
//! annotates the entity with its `host/org` and `project/repo` identity.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use config::{Config, ConfigError};
pub use crate::core::models::{Entity, HostRegistry, LocationSpec, ParsedLocation};
pub use crate::core::ports::CatalogProcessor;
pub use crate::core::services::{AzureDevOpsAnnotator, parse_location};
