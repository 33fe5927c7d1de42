//! Behavior dispatch for the entity standing on the player's target cell.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, error, warn};

use zoldath_rules::{icons, Behavior, Direction, Entity, Location, TileMap};

use super::{MoveOutcome, World};
use crate::audio::{AudioError, TrackRegistry};
use crate::config::GameConfig;

pub(super) const HEART: &str = "❤️";
pub(super) const SHIP_REPAIRED_TEXT: &str = "SHHWIP - Your ship's systems come back to life";
pub(super) const SHIP_DAMAGED_TEXT: &str = "Your ship is damaged! It needs 3 parts to be repaired.";

/// Upper bound on hearts drawn in a fight readout.
const MAX_FIGHT_HEARTS: i32 = 100;
/// Upper bound on swords drawn in a fight readout.
const MAX_FIGHT_SWORDS: i32 = 100;

/// One resolution of the target cell, borrowing everything it may touch.
pub(super) struct Interaction<'a> {
    pub(super) world: &'a mut World,
    pub(super) map: &'a TileMap,
    pub(super) config: &'a GameConfig,
    pub(super) audio: &'a mut TrackRegistry,
    pub(super) rng: &'a mut StdRng,
    pub(super) direction: Direction,
    pub(super) target: Location,
    pub(super) wraps: bool,
}

impl Interaction<'_> {
    pub(super) fn resolve(self) -> MoveOutcome {
        let Some(entity) = self.world.entities.find_at(self.target).cloned() else {
            self.world.entities.clear_all_entity_text();
            self.world.player.location = self.target;
            return MoveOutcome::Moved;
        };

        let kind = entity.behavior.kind();
        self.interact(&entity);
        MoveOutcome::Interacted(kind)
    }

    fn interact(self, entity: &Entity) {
        match &entity.behavior {
            Behavior::Talk { text } => {
                self.world.entities.set_text_for_entity(entity.id, text.as_str());
            }
            Behavior::Fight {
                damage,
                health,
                drop,
            } => self.fight(entity, *damage, *health, drop),
            Behavior::Chop => {
                if self.world.player.inventory.contains(icons::AXE) {
                    let log = self.world.entities.create_entity(icons::LOG, entity.location);
                    self.world.entities.replace_entity(entity.id, log);
                }
            }
            Behavior::Item => {
                self.world.player.inventory.add(entity.icon.as_str());
                self.world.entities.delete_entity(entity.id);
                self.world.player.location = entity.location;
            }
            Behavior::Trade { .. } => self.trade(entity),
            Behavior::Ship { .. } => self.repair_ship(entity),
            Behavior::Audio { track } => match self.audio.toggle(track) {
                Ok(playing) => debug!(%track, playing, "toggled track"),
                Err(AudioError::NotLoaded) => warn!(%track, "tracks still loading"),
                Err(err) => error!(%track, %err, "could not toggle track"),
            },
            Behavior::Planter {
                input,
                output,
                request_text,
            } => self.plant(entity, input, output, request_text),
            Behavior::Bird { output } => self.fly_away(entity, output),
            Behavior::Toll {
                input,
                blocked_text,
                request_text,
                satisfied_text,
            } => self.collect_toll(entity, input, blocked_text, request_text, satisfied_text),
            Behavior::Trample => {
                self.world.player.location = entity.location;
                self.world.entities.delete_entity(entity.id);
            }
            Behavior::Hurt { damage } => {
                self.world.player.health -= damage;
            }
            Behavior::Eat { heal } => {
                self.world.player.location = entity.location;
                self.world.player.health += heal;
                self.world.entities.delete_entity(entity.id);
            }
            Behavior::Mine | Behavior::Replace { .. } | Behavior::None => {
                warn!(behavior = %entity.behavior.kind(), icon = %entity.icon, "behavior not implemented");
            }
        }
    }

    fn fight(self, entity: &Entity, damage: i32, health: i32, drop: &str) {
        let swords = self.world.player.inventory.count(icons::SWORD);
        let remaining = health - self.config.player_damage(swords);

        if remaining <= 0 {
            let dropped = self.world.entities.create_entity(drop, entity.location);
            self.world.entities.replace_entity(entity.id, dropped);
            debug!(icon = %entity.icon, %drop, "entity defeated");
            return;
        }

        let readout = format!(
            "{} - {}",
            icons::SWORD.repeat(damage.clamp(0, MAX_FIGHT_SWORDS) as usize),
            HEART.repeat(remaining.clamp(0, MAX_FIGHT_HEARTS) as usize),
        );
        let wounded = entity
            .with_behavior(Behavior::Fight {
                damage,
                health: remaining,
                drop: drop.to_string(),
            })
            .with_text(readout);
        self.world.entities.replace_entity(entity.id, wounded);
        self.world.player.health -= damage;
    }

    fn trade(self, entity: &Entity) {
        let Behavior::Trade {
            request_text,
            satisfied_text,
            input,
            output,
            has_traded,
            reusable,
        } = &entity.behavior
        else {
            return;
        };

        if *has_traded {
            self.world
                .entities
                .set_text_for_entity(entity.id, satisfied_text.as_str());
            return;
        }

        if !self.world.player.inventory.contains_all(input) {
            self.world
                .entities
                .set_text_for_entity(entity.id, request_text.as_str());
            return;
        }

        let inventory = &mut self.world.player.inventory;
        inventory.remove_all_by_icon(input);
        for icon in output {
            inventory.add(icon.as_str());
        }

        let traded = entity
            .with_behavior(Behavior::Trade {
                request_text: request_text.clone(),
                satisfied_text: satisfied_text.clone(),
                input: input.clone(),
                output: output.clone(),
                has_traded: !reusable,
                reusable: *reusable,
            })
            .with_text(satisfied_text.as_str());
        self.world.entities.replace_entity(entity.id, traded);
    }

    fn repair_ship(self, entity: &Entity) {
        if !self.world.player.inventory.contains_all(&icons::SHIP_PARTS) {
            self.world
                .entities
                .set_text_for_entity(entity.id, SHIP_DAMAGED_TEXT);
            return;
        }

        let repaired = entity
            .with_behavior(Behavior::Ship { is_repaired: true })
            .with_text(SHIP_REPAIRED_TEXT);
        self.world.entities.replace_entity(entity.id, repaired);
        self.world
            .player
            .inventory
            .remove_all_by_icon(&icons::SHIP_PARTS_CONSUMED);
    }

    fn plant(mut self, entity: &Entity, input: &[String], output: &[String], request_text: &str) {
        if !self.world.player.inventory.contains_all(input) {
            self.world
                .entities
                .set_text_for_entity(entity.id, request_text);
            return;
        }

        // Only the first output is planted.
        let Some(seed) = output.first() else {
            warn!(icon = %entity.icon, "planter has nothing to plant");
            return;
        };

        let Some(spot) = self.random_empty_location() else {
            debug!(icon = %entity.icon, "no empty cell to plant in");
            return;
        };

        self.world.entities.add_entity(seed, spot);
        self.world.player.inventory.remove_all_by_icon(input);
        debug!(%seed, location = %spot, "planted");
    }

    fn fly_away(mut self, entity: &Entity, output: &str) {
        let Some(spot) = self.random_empty_location() else {
            debug!(icon = %entity.icon, "no empty cell to fly to");
            return;
        };

        self.world
            .entities
            .replace_entity(entity.id, entity.with_location(spot));
        self.world.entities.add_entity(output, entity.location);
        debug!(from = %entity.location, to = %spot, "bird flew away");
    }

    fn collect_toll(
        self,
        entity: &Entity,
        input: &[String],
        blocked_text: &str,
        request_text: &str,
        satisfied_text: &str,
    ) {
        let mut beyond = entity.location.step(self.direction);
        if self.wraps {
            beyond = self.map.wrap(beyond);
        }

        let blocked = !self.map.contains(beyond)
            || beyond == self.world.player.location
            || self.world.entities.is_occupied(beyond);

        if blocked {
            self.world
                .entities
                .set_text_for_entity(entity.id, blocked_text);
            return;
        }

        if !self.world.player.inventory.contains_all(input) {
            self.world
                .entities
                .set_text_for_entity(entity.id, request_text);
            return;
        }

        self.world.player.inventory.remove_all_by_icon(input);
        self.world.player.location = beyond;
        self.world
            .entities
            .set_text_for_entity(entity.id, satisfied_text);
    }

    /// Uniform pick among cells with no entity and no player.
    fn random_empty_location(&mut self) -> Option<Location> {
        self.world
            .empty_locations(self.map)
            .choose(&mut *self.rng)
            .copied()
    }
}
