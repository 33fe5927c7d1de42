//! What the renderer gets to see after each command.

use serde::{Deserialize, Serialize};
use zoldath_rules::Location;

use crate::engine::{Game, GameStatus};

/// One entity as drawn on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityView {
    pub icon: String,
    pub location: Location,
    pub text: String,
}

/// Read-only view of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tiles: Vec<Vec<String>>,
    pub player: Location,
    pub entities: Vec<EntityView>,
    pub inventory: Vec<String>,
    pub health: i32,
    /// Hearts to draw: health clamped to the configured display range.
    pub hearts: usize,
    pub status: GameStatus,
}

impl RenderSnapshot {
    /// Serialize for a browser front end.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Game {
    /// Capture everything the renderer needs.
    pub fn snapshot(&self) -> RenderSnapshot {
        let player = self.player();
        let hearts = player
            .health
            .clamp(0, self.config().max_display_hearts.max(0)) as usize;

        RenderSnapshot {
            tiles: self.map().rows().to_vec(),
            player: player.location,
            entities: self
                .entities()
                .entities()
                .iter()
                .map(|entity| EntityView {
                    icon: entity.icon.clone(),
                    location: entity.location,
                    text: entity.text.clone(),
                })
                .collect(),
            inventory: player.inventory.icons(),
            health: player.health,
            hearts,
            status: self.status(),
        }
    }
}
