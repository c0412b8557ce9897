//! Domain models for azdo-annotator
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`HostRegistry`] - Recognized Azure DevOps hosts
//! - [`ParsedLocation`] - Identity recovered from a repository URL
//! - [`AllowedKinds`] - Which entity kinds may be annotated
//! - [`Entity`] / [`LocationSpec`] - Catalog records and where they came from

mod entity;
mod host;
mod kinds;
mod location;
mod parsed_location;

pub use entity::{DEFAULT_API_VERSION, Entity, EntityMetadata};
pub use host::{DEFAULT_HOST, HostEntry, HostRegistry};
pub use kinds::AllowedKinds;
pub use location::{LocationSpec, URL_LOCATION_TYPE};
pub use parsed_location::ParsedLocation;
