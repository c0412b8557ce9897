//! Catalog processor port
//!
//! Defines the interface an ingestion pipeline uses to drive processors.

use crate::core::models::{Entity, LocationSpec};

/// A step in the catalog ingestion pipeline
///
/// Processors receive each entity together with the location it was read
/// from and return the (possibly modified) entity. Implementations must be
/// safe to call concurrently.
pub trait CatalogProcessor: Send + Sync {
    /// Stable processor name, used in logs
    fn get_processor_name(&self) -> &'static str;

    /// Process an entity before it is validated and stored
    ///
    /// Never fails: inputs a processor does not handle come back unchanged.
    fn pre_process_entity(&self, entity: Entity, location: &LocationSpec) -> Entity;

    /// Run [`Self::pre_process_entity`] over a batch
    fn pre_process_all(&self, entities: Vec<(Entity, LocationSpec)>) -> Vec<Entity> {
        entities
            .into_iter()
            .map(|(entity, location)| self.pre_process_entity(entity, &location))
            .collect()
    }
}
