//! Azure DevOps annotator - attaches repository identity to catalog entities
//!
//! Pure orchestration over [`parse_location`]: filter by kind and location
//! type, match the URL, then add the reserved annotations without replacing
//! anything already present.

use log::{debug, info};

use super::matcher::parse_location;
use crate::config::Config;
use crate::core::models::{AllowedKinds, Entity, HostRegistry, LocationSpec};
use crate::core::ports::CatalogProcessor;

/// Annotation holding `<host>[/<collection>]/<organization>`
pub const ANNOTATION_HOST_ORG: &str = "dev.azure.com/host-org";

/// Annotation holding `<project>/<repository>`
pub const ANNOTATION_PROJECT_REPO: &str = "dev.azure.com/project-repo";

/// Name reported through [`CatalogProcessor::get_processor_name`]
pub const PROCESSOR_NAME: &str = "AzureDevOpsAnnotatorProcessor";

/// Processor options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessorOptions {
    /// Entity kinds to annotate
    pub kinds: AllowedKinds,
}

/// Why an entity was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skipped {
    /// The entity kind is not in the allow-list
    KindNotAllowed,
    /// The location is not a `url` location
    NotUrlLocation,
    /// The URL is not a recognized Azure DevOps repository URL
    NoMatch,
}

impl std::fmt::Display for Skipped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KindNotAllowed => write!(f, "entity kind is not processed"),
            Self::NotUrlLocation => write!(f, "location is not a url"),
            Self::NoMatch => write!(f, "not an Azure DevOps repository url"),
        }
    }
}

/// Result of annotating one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Nothing was done
    Skipped(Skipped),
    /// The URL matched
    Matched {
        /// Keys written by this call
        added: Vec<&'static str>,
        /// Keys that were already present and kept as-is
        kept: Vec<&'static str>,
    },
}

impl Annotation {
    /// Whether any annotation was written
    #[must_use]
    pub fn changed(&self) -> bool {
        matches!(self, Self::Matched { added, .. } if !added.is_empty())
    }
}

/// Annotates entities whose source location is an Azure DevOps repository
#[derive(Debug, Clone, Default)]
pub struct AzureDevOpsAnnotator {
    registry: HostRegistry,
    options: ProcessorOptions,
}

impl AzureDevOpsAnnotator {
    /// Create an annotator recognizing only `dev.azure.com`, processing all kinds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an annotator from an explicit registry and options
    #[must_use]
    pub const fn with_options(registry: HostRegistry, options: ProcessorOptions) -> Self {
        Self { registry, options }
    }

    /// Create an annotator from loaded configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_options(config.host_registry(), config.processor_options())
    }

    /// The hosts this annotator recognizes
    #[must_use]
    pub const fn registry(&self) -> &HostRegistry {
        &self.registry
    }

    /// The processor options in effect
    #[must_use]
    pub const fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Annotate an entity in place and report what happened
    ///
    /// Reserved keys already present on the entity are never replaced.
    pub fn annotate(&self, entity: &mut Entity, location: &LocationSpec) -> Annotation {
        if !self.options.kinds.allows(&entity.kind) {
            debug!("skipping {}:{}: {}", entity.kind, entity.metadata.name, Skipped::KindNotAllowed);
            return Annotation::Skipped(Skipped::KindNotAllowed);
        }

        if !location.is_url() {
            debug!("skipping {}:{}: {}", entity.kind, entity.metadata.name, Skipped::NotUrlLocation);
            return Annotation::Skipped(Skipped::NotUrlLocation);
        }

        let Some(parsed) = parse_location(&location.target, &self.registry) else {
            return Annotation::Skipped(Skipped::NoMatch);
        };

        let mut added = Vec::new();
        let mut kept = Vec::new();
        for (key, value) in [
            (ANNOTATION_HOST_ORG, parsed.host_org()),
            (ANNOTATION_PROJECT_REPO, parsed.project_repo()),
        ] {
            if entity.set_annotation_if_absent(key, value) {
                added.push(key);
            } else {
                kept.push(key);
            }
        }

        if added.is_empty() {
            debug!("{}:{} already annotated", entity.kind, entity.metadata.name);
        } else {
            info!("annotated {}:{} with {parsed}", entity.kind, entity.metadata.name);
        }

        Annotation::Matched { added, kept }
    }
}

impl CatalogProcessor for AzureDevOpsAnnotator {
    fn get_processor_name(&self) -> &'static str {
        PROCESSOR_NAME
    }

    fn pre_process_entity(&self, mut entity: Entity, location: &LocationSpec) -> Entity {
        self.annotate(&mut entity, location);
        entity
    }
}
