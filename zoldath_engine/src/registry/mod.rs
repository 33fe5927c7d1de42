//! Entity Registry - the single owner of the live entity list.
//!
//! All changes go through whole-record operations keyed by [`EntityId`]:
//! create, delete, replace, set text, clear text. Lookups by location or icon
//! return the first match in list order, so earlier insertions win ties.

use std::sync::Arc;

use tracing::debug;
use zoldath_rules::{BehaviorCatalog, Entity, EntityId, Location, TileMap, EMPTY_TILE};

/// The live entity list plus the catalog used to instantiate new entities.
#[derive(Debug, Clone)]
pub struct EntityRegistry {
    catalog: Arc<BehaviorCatalog>,
    entities: Vec<Entity>,
}

impl EntityRegistry {
    /// Create an empty registry that builds entities from `catalog`.
    pub fn new(catalog: Arc<BehaviorCatalog>) -> Self {
        Self {
            catalog,
            entities: Vec::new(),
        }
    }

    /// Create a registry populated from a map.
    pub fn from_map(catalog: Arc<BehaviorCatalog>, map: &TileMap) -> Self {
        let mut registry = Self::new(catalog);
        registry.rebuild(map);
        registry
    }

    /// Replace the whole entity list with one entity per non-empty tile, row-major.
    ///
    /// Rebuilding from the same map always yields the same icons, behaviors and
    /// locations, but with fresh ids.
    pub fn rebuild(&mut self, map: &TileMap) {
        self.entities = map
            .cells()
            .filter(|(_, icon)| *icon != EMPTY_TILE)
            .map(|(location, icon)| self.catalog.create(icon, location))
            .collect();

        debug!(count = self.entities.len(), "rebuilt entities from map");
    }

    pub fn catalog(&self) -> &BehaviorCatalog {
        &self.catalog
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.position(id).is_some()
    }

    /// First entity standing on `location`.
    pub fn find_at(&self, location: Location) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|entity| entity.location == location)
    }

    /// First entity with the given icon.
    pub fn find_by_icon(&self, icon: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.icon == icon)
    }

    pub fn is_occupied(&self, location: Location) -> bool {
        self.find_at(location).is_some()
    }

    /// Build an entity from the catalog without registering it.
    pub fn create_entity(&self, icon: &str, location: Location) -> Entity {
        self.catalog.create(icon, location)
    }

    /// Create an entity and append it to the list.
    pub fn add_entity(&mut self, icon: &str, location: Location) -> EntityId {
        let entity = self.create_entity(icon, location);
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    /// Remove the entity with this id.
    pub fn delete_entity(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.position(id)?;
        Some(self.entities.remove(index))
    }

    /// Put `entity` in the slot held by `old_id`. The new record may carry a different id.
    ///
    /// Returns false when `old_id` is not registered.
    pub fn replace_entity(&mut self, old_id: EntityId, entity: Entity) -> bool {
        match self.position(old_id) {
            Some(index) => {
                self.entities[index] = entity;
                true
            }
            None => {
                debug!(%old_id, "replace skipped, entity is gone");
                false
            }
        }
    }

    /// Replace the dialogue of one entity.
    pub fn set_text_for_entity(&mut self, id: EntityId, text: impl Into<String>) -> bool {
        match self.get(id) {
            Some(entity) => {
                let updated = entity.with_text(text);
                self.replace_entity(id, updated)
            }
            None => false,
        }
    }

    /// Blank the dialogue of every entity.
    pub fn clear_all_entity_text(&mut self) {
        self.entities = self
            .entities
            .iter()
            .map(|entity| entity.with_text(""))
            .collect();
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|entity| entity.id == id)
    }
}
