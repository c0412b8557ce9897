//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the pure annotation logic and
//! the ingestion pipeline that feeds it entities.

mod processor;

pub use processor::CatalogProcessor;
