//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`matcher`] - Match URLs against recognized Azure DevOps hosts
//! - [`annotator`] - Annotate entities with the matched identity

pub mod annotator;
pub mod matcher;

pub use annotator::{
    ANNOTATION_HOST_ORG, ANNOTATION_PROJECT_REPO, Annotation, AzureDevOpsAnnotator, PROCESSOR_NAME,
    ProcessorOptions, Skipped,
};
pub use matcher::{GIT_MARKER, is_azure_devops_url, parse_location};
