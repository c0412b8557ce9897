//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Entity, ParsedLocation};
use crate::core::services::{Annotation, Skipped};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a parse operation
#[derive(Debug, Serialize)]
pub struct ParseResult {
    /// The URL that was parsed
    pub url: String,
    /// Whether the URL is a recognized Azure DevOps repository URL
    pub matched: bool,
    /// Extracted identity, when matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<IdentityInfo>,
}

/// Identity extracted from a repository URL
#[derive(Debug, Serialize)]
pub struct IdentityInfo {
    /// `<host>[/<collection>]/<organization>`
    pub host_org: String,
    /// `<project>/<repository>`
    pub project_repo: String,
    /// Recognized host
    pub host: String,
    /// On-premises collection subpath segments
    pub collection: Vec<String>,
    /// Organization
    pub organization: String,
    /// Project
    pub project: String,
    /// Repository
    pub repository: String,
}

impl From<&ParsedLocation> for IdentityInfo {
    fn from(parsed: &ParsedLocation) -> Self {
        Self {
            host_org: parsed.host_org(),
            project_repo: parsed.project_repo(),
            host: parsed.host().to_string(),
            collection: parsed.collection().to_vec(),
            organization: parsed.organization().to_string(),
            project: parsed.project().to_string(),
            repository: parsed.repository().to_string(),
        }
    }
}

impl ParseResult {
    /// Build a result from the matcher output
    #[must_use]
    pub fn new(url: &str, parsed: Option<&ParsedLocation>) -> Self {
        Self {
            url: url.to_string(),
            matched: parsed.is_some(),
            identity: parsed.map(IdentityInfo::from),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match &self.identity {
            Some(identity) => {
                println!("host-org:     {}", identity.host_org);
                println!("project-repo: {}", identity.project_repo);
            },
            None => println!("{} {}", "No match:".yellow(), self.url),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of an annotate operation
#[derive(Debug, Serialize)]
pub struct AnnotateResult {
    /// Whether the location matched a recognized repository
    pub matched: bool,
    /// Annotation keys written
    pub added: Vec<String>,
    /// Annotation keys that were already present and kept
    pub kept: Vec<String>,
    /// Why the entity was skipped, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
    /// The resulting entity
    pub entity: Entity,
}

impl AnnotateResult {
    /// Build a result from the annotator outcome
    #[must_use]
    pub fn new(annotation: &Annotation, entity: Entity) -> Self {
        let (matched, added, kept, skipped): (bool, Vec<String>, Vec<String>, Option<&str>) =
            match annotation {
                Annotation::Skipped(reason) => {
                    (false, Vec::new(), Vec::new(), Some(skip_code(*reason)))
                },
                Annotation::Matched { added, kept } => (
                    true,
                    added.iter().map(ToString::to_string).collect(),
                    kept.iter().map(ToString::to_string).collect(),
                    None,
                ),
            };
        Self {
            matched,
            added,
            kept,
            skipped: skipped.map(String::from),
            entity,
        }
    }

    /// Render the result based on output mode
    ///
    /// Human mode writes the entity to stdout and a summary to stderr, so the
    /// entity can be piped onward.
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if let Some(reason) = &self.skipped {
            eprintln!("{} {}", "Skipped:".yellow(), reason);
        }
        for key in &self.added {
            eprintln!("{} {}", "Added:".green(), key);
        }
        for key in &self.kept {
            eprintln!("{} {}", "Kept:".cyan(), key);
        }
        println!("{}", serde_json::to_string_pretty(&self.entity).unwrap_or_default());
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

const fn skip_code(reason: Skipped) -> &'static str {
    match reason {
        Skipped::KindNotAllowed => "kind_not_allowed",
        Skipped::NotUrlLocation => "not_url_location",
        Skipped::NoMatch => "no_match",
    }
}
