//! Entity definitions for the game world.

mod behavior;
mod catalog;
pub mod icons;

pub use behavior::*;
pub use catalog::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grid::Location;

/// Unique identifier for every entity placed on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an entity ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something standing on a tile: a creature, a plant, an item, a machine.
///
/// Entities are value records. Changing a field means building a new record and
/// handing it to the registry as a replacement for the old id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub icon: String,
    pub location: Location,
    pub behavior: Behavior,
    pub timer_behavior: TimerBehavior,
    /// Dialogue shown next to the entity until the player walks away.
    pub text: String,
}

impl Entity {
    /// Copy of this entity with different dialogue.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Copy of this entity with a different behavior.
    pub fn with_behavior(&self, behavior: Behavior) -> Self {
        Self {
            behavior,
            ..self.clone()
        }
    }

    /// Copy of this entity with a different timer behavior.
    pub fn with_timer_behavior(&self, timer_behavior: TimerBehavior) -> Self {
        Self {
            timer_behavior,
            ..self.clone()
        }
    }

    /// Copy of this entity standing somewhere else.
    pub fn with_location(&self, location: Location) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ids_are_unique() {
        assert_ne!(EntityId::new(), EntityId::new());
        let uuid = Uuid::new_v4();
        assert_eq!(EntityId::from_uuid(uuid), EntityId::from_uuid(uuid));
    }

    #[test]
    fn test_with_helpers_keep_identity() {
        let entity = BehaviorCatalog::standard().create(icons::BEE, Location::new(2, 3));

        let talking = entity.with_text("bzz");
        assert_eq!(talking.id, entity.id);
        assert_eq!(talking.text, "bzz");
        assert_eq!(talking.behavior, entity.behavior);

        let moved = entity.with_location(Location::new(0, 0));
        assert_eq!(moved.id, entity.id);
        assert_eq!(moved.location, Location::new(0, 0));
        assert_eq!(moved.icon, entity.icon);
    }
}
