//! Per-move timer simulation: growth and fire spread.

use tracing::debug;
use zoldath_rules::{icons, Entity, TileMap, TimerBehavior};

use crate::registry::EntityRegistry;

/// Advance every entity's timer behavior by one move.
///
/// Entities are visited from a snapshot taken before the tick, so anything
/// spawned or transformed during the tick waits for the next one.
pub(super) fn tick(entities: &mut EntityRegistry, map: &TileMap) {
    let snapshot: Vec<Entity> = entities.entities().to_vec();

    for entity in &snapshot {
        match &entity.timer_behavior {
            TimerBehavior::None => {}
            TimerBehavior::Grow {
                elapsed_time,
                target_time,
                new_entity,
            } => {
                let elapsed_time = elapsed_time + 1;

                if elapsed_time >= *target_time {
                    if entities.delete_entity(entity.id).is_some() {
                        entities.add_entity(new_entity, entity.location);
                        debug!(from = %entity.icon, to = %new_entity, location = %entity.location, "entity grew");
                    }
                } else if let Some(live) = entities.get(entity.id) {
                    let grown = live.with_timer_behavior(TimerBehavior::Grow {
                        elapsed_time,
                        target_time: *target_time,
                        new_entity: new_entity.clone(),
                    });
                    entities.replace_entity(entity.id, grown);
                }
            }
            TimerBehavior::Flammable => spread_fire(entities, map, &snapshot, entity),
        }
    }
}

fn spread_fire(entities: &mut EntityRegistry, map: &TileMap, snapshot: &[Entity], source: &Entity) {
    for location in map.neighbors(source.location) {
        let Some(neighbor) = snapshot.iter().find(|other| other.location == location) else {
            continue;
        };

        if !icons::BURNABLE.contains(&neighbor.icon.as_str()) {
            continue;
        }

        // Two fires can share a neighbor; only the first one burns it.
        if entities.delete_entity(neighbor.id).is_some() {
            entities.add_entity(icons::FIRE, neighbor.location);
            debug!(%location, "fire spread");
        }
    }
}
