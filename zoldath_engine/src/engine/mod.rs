//! Movement & Interaction Engine.
//!
//! Each directional command is handled to completion before the next one:
//!
//! 1. **Reject** if the player is dead.
//! 2. **Target**: step from the player's cell, wrapping around the edges when
//!    the helicopter is carried.
//! 3. **Reject** if the target is off the grid.
//! 4. **Tick** every entity's timer behavior once.
//! 5. **Resolve** the target cell: walk onto empty ground, or run the occupying
//!    entity's behavior.
//!
//! Steps 4 and 5 run on a copy of the world that replaces the live one only
//! when the command finishes, so a command either commits all of its effects
//! or none of them.

mod interactions;
mod timers;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use zoldath_rules::{
    icons, Behavior, BehaviorCatalog, BehaviorKind, Direction, Inventory, Location, RulesError,
    TileMap,
};

use crate::audio::TrackRegistry;
use crate::config::GameConfig;
use crate::registry::EntityRegistry;

/// The Zoldath map template.
pub const STANDARD_MAP: &str = include_str!("../../assets/zoldath.txt");

/// The player: where they stand, how hurt they are, what they carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub location: Location,
    pub health: i32,
    pub inventory: Inventory,
}

impl PlayerState {
    fn spawn(config: &GameConfig) -> Self {
        Self {
            location: config.spawn,
            health: config.initial_health,
            inventory: Inventory::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Why a command was refused without touching any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Health is at or below zero; only a reset revives the player.
    Dead,
    /// The target cell is off the grid.
    OutOfBounds,
}

/// What a single command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Rejected(RejectReason),
    /// The player walked onto an empty cell.
    Moved,
    /// The target cell held an entity and its behavior ran.
    Interacted(BehaviorKind),
}

/// Overall state of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Dead,
    /// The ship has been repaired.
    Escaped,
}

/// Everything a command may change.
#[derive(Debug, Clone)]
pub(crate) struct World {
    pub(crate) player: PlayerState,
    pub(crate) entities: EntityRegistry,
}

impl World {
    fn new(config: &GameConfig, catalog: Arc<BehaviorCatalog>, map: &TileMap) -> Self {
        Self {
            player: PlayerState::spawn(config),
            entities: EntityRegistry::from_map(catalog, map),
        }
    }

    /// Cells with no entity on them and no player.
    pub(crate) fn empty_locations(&self, map: &TileMap) -> Vec<Location> {
        map.locations()
            .filter(|location| {
                *location != self.player.location && !self.entities.is_occupied(*location)
            })
            .collect()
    }
}

/// A play session on one map.
#[derive(Debug)]
pub struct Game {
    map: TileMap,
    catalog: Arc<BehaviorCatalog>,
    config: GameConfig,
    world: World,
    audio: TrackRegistry,
    rng: StdRng,
}

impl Game {
    /// Start a session on `map` using the given catalog and config.
    ///
    /// Audio starts in the loading state; install tracks through
    /// [`Game::audio_mut`].
    pub fn new(map: TileMap, catalog: BehaviorCatalog, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let catalog = Arc::new(catalog);
        let world = World::new(&config, Arc::clone(&catalog), &map);

        Self {
            map,
            catalog,
            config,
            world,
            audio: TrackRegistry::standard(),
            rng,
        }
    }

    /// Start a session with the standard catalog and default config.
    pub fn with_defaults(map: TileMap) -> Self {
        Self::new(map, BehaviorCatalog::standard(), GameConfig::default())
    }

    /// Start a session on the Zoldath map with the standard catalog.
    pub fn standard(config: GameConfig) -> Result<Self, RulesError> {
        let map = TileMap::parse(STANDARD_MAP)?;
        Ok(Self::new(map, BehaviorCatalog::standard(), config))
    }

    /// Swap in a different audio registry.
    pub fn with_audio(mut self, audio: TrackRegistry) -> Self {
        self.audio = audio;
        self
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerState {
        &self.world.player
    }

    pub fn entities(&self) -> &EntityRegistry {
        &self.world.entities
    }

    pub fn audio(&self) -> &TrackRegistry {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut TrackRegistry {
        &mut self.audio
    }

    /// Current session status. Death takes precedence over escape.
    pub fn status(&self) -> GameStatus {
        if !self.world.player.is_alive() {
            return GameStatus::Dead;
        }

        match self.world.entities.find_by_icon(icons::SHIP) {
            Some(ship) if matches!(ship.behavior, Behavior::Ship { is_repaired: true }) => {
                GameStatus::Escaped
            }
            _ => GameStatus::Playing,
        }
    }

    /// Handle one directional command.
    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        if !self.world.player.is_alive() {
            debug!(?direction, "move rejected, player is dead");
            return MoveOutcome::Rejected(RejectReason::Dead);
        }

        let wraps = self.world.player.inventory.contains(icons::HELICOPTER);
        let mut target = self.world.player.location.step(direction);
        if wraps {
            target = self.map.wrap(target);
        }

        if !self.map.contains(target) {
            debug!(?direction, %target, "move rejected, out of bounds");
            return MoveOutcome::Rejected(RejectReason::OutOfBounds);
        }

        let status_before = self.status();
        let mut next = self.world.clone();

        timers::tick(&mut next.entities, &self.map);

        let outcome = interactions::Interaction {
            world: &mut next,
            map: &self.map,
            config: &self.config,
            audio: &mut self.audio,
            rng: &mut self.rng,
            direction,
            target,
            wraps,
        }
        .resolve();

        self.world = next;

        let status_after = self.status();
        if status_after != status_before {
            info!(?status_before, ?status_after, "game status changed");
        }

        outcome
    }

    /// Restore the starting inventory, health and location, and rebuild every
    /// entity from the map.
    pub fn reset(&mut self) {
        self.world = World::new(&self.config, Arc::clone(&self.catalog), &self.map);
        info!(
            health = self.world.player.health,
            entities = self.world.entities.len(),
            "game reset"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoldath_rules::TimerBehavior;

    fn game(text: &str) -> Game {
        let config = GameConfig {
            spawn: Location::new(0, 0),
            seed: Some(11),
            ..GameConfig::default()
        };
        Game::new(
            TileMap::parse(text).unwrap(),
            BehaviorCatalog::standard(),
            config,
        )
    }

    #[test]
    fn test_move_onto_empty_cell() {
        let mut game = game("...\n...");
        assert_eq!(game.try_move(Direction::Right), MoveOutcome::Moved);
        assert_eq!(game.player().location, Location::new(0, 1));
        assert_eq!(game.try_move(Direction::Down), MoveOutcome::Moved);
        assert_eq!(game.player().location, Location::new(1, 1));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut game = game("..\n..");
        let before = game.player().clone();

        assert_eq!(
            game.try_move(Direction::Up),
            MoveOutcome::Rejected(RejectReason::OutOfBounds)
        );
        assert_eq!(
            game.try_move(Direction::Left),
            MoveOutcome::Rejected(RejectReason::OutOfBounds)
        );
        assert_eq!(game.player(), &before);
    }

    #[test]
    fn test_rejected_move_does_not_tick_timers() {
        let mut game = game(".🌱\n..");
        game.try_move(Direction::Up);

        let seedling = game.entities().find_by_icon(icons::SEEDLING).unwrap();
        assert!(matches!(
            seedling.timer_behavior,
            TimerBehavior::Grow { elapsed_time: 0, .. }
        ));
    }

    #[test]
    fn test_helicopter_wraps_around_edges() {
        let mut game = game(".🚁.\n...");
        assert_eq!(
            game.try_move(Direction::Right),
            MoveOutcome::Interacted(BehaviorKind::Item)
        );
        assert!(game.player().inventory.contains(icons::HELICOPTER));
        assert_eq!(game.try_move(Direction::Left), MoveOutcome::Moved);
        assert_eq!(game.player().location, Location::new(0, 0));

        assert_eq!(game.try_move(Direction::Left), MoveOutcome::Moved);
        assert_eq!(game.player().location, Location::new(0, 2));
        assert_eq!(game.try_move(Direction::Up), MoveOutcome::Moved);
        assert_eq!(game.player().location, Location::new(1, 2));
        assert_eq!(game.try_move(Direction::Down), MoveOutcome::Moved);
        assert_eq!(game.player().location, Location::new(0, 2));
    }

    #[test]
    fn test_dead_player_cannot_move() {
        let mut game = game(".🔥\n..");
        game.world.player.health = 1;

        assert_eq!(
            game.try_move(Direction::Right),
            MoveOutcome::Interacted(BehaviorKind::Hurt)
        );
        assert_eq!(game.player().health, 0);
        assert_eq!(game.status(), GameStatus::Dead);

        assert_eq!(
            game.try_move(Direction::Down),
            MoveOutcome::Rejected(RejectReason::Dead)
        );
        assert_eq!(game.player().location, Location::new(0, 0));
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut game = game(".💰🐝\n...");
        game.try_move(Direction::Right);
        assert_eq!(game.player().inventory.len(), 1);
        assert_eq!(game.entities().len(), 1);

        game.world.player.health = -2;
        game.reset();

        assert_eq!(game.player().health, 3);
        assert_eq!(game.player().location, Location::new(0, 0));
        assert!(game.player().inventory.is_empty());
        assert_eq!(game.entities().len(), 2);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.try_move(Direction::Down), MoveOutcome::Moved);
    }

    #[test]
    fn test_status_escaped_when_ship_repaired() {
        let mut game = game(".🛸");
        assert_eq!(game.status(), GameStatus::Playing);

        let ship = game.entities().find_by_icon(icons::SHIP).unwrap().clone();
        let repaired = ship.with_behavior(Behavior::Ship { is_repaired: true });
        game.world.entities.replace_entity(ship.id, repaired);

        assert_eq!(game.status(), GameStatus::Escaped);
    }
}
