//! The icon → behavior table that decides what every glyph on the map does.

use serde::Deserialize;
use std::collections::HashMap;

use super::{icons, Behavior, Entity, EntityId, TimerBehavior};
use crate::error::RulesError;
use crate::grid::Location;

/// Default behaviors keyed by icon.
///
/// Icons missing from the table behave as [`Behavior::None`] with
/// [`TimerBehavior::None`].
#[derive(Debug, Clone, Default)]
pub struct BehaviorCatalog {
    behaviors: HashMap<String, Behavior>,
    timers: HashMap<String, TimerBehavior>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entity: Vec<CatalogRecord>,
}

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    icon: String,
    behavior: Option<Behavior>,
    timer: Option<TimerBehavior>,
}

impl BehaviorCatalog {
    /// Create a catalog with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table for the Zoldath map.
    pub fn standard() -> Self {
        let mut catalog = Self::empty();

        catalog.insert(icons::DECIDUOUS_TREE, Behavior::Chop);
        catalog.insert(icons::EVERGREEN_TREE, Behavior::Chop);
        catalog.insert(icons::SEEDLING, Behavior::Trample);
        catalog.insert(
            icons::ALIEN,
            trade(&[], &[icons::COIN], "Welcome to Zoldath!!", "Welcome to Zoldath!!", false),
        );
        catalog.insert(icons::MUSHROOM, Behavior::None);
        catalog.insert(
            icons::ROBOT,
            trade(
                &[icons::BATTERY],
                &[icons::TOOLS],
                "-- power saver mode engaged --",
                "BRRP. Robotic Assistant Online. Dispensing repair tools.",
                false,
            ),
        );
        catalog.insert(
            icons::FIREFIGHTER,
            trade(
                &[icons::COIN, icons::COIN, icons::COIN],
                &[icons::AXE],
                "💰💰💰 and you can have my 🪓.",
                "Treat her well!",
                false,
            ),
        );

        for item in [
            icons::AXE,
            icons::LOG,
            icons::GEAR,
            icons::TOOLS,
            icons::BOLT,
            icons::COIN,
            icons::HONEY,
            icons::SWORD,
            icons::PICKAXE,
            icons::BATTERY,
            icons::LOW_BATTERY,
            icons::HELICOPTER,
            icons::ACORN,
        ] {
            catalog.insert(item, Behavior::Item);
        }

        catalog.insert(icons::BEE, fight(1, 1, icons::HONEY));
        catalog.insert(icons::OGRE, fight(1, 3, icons::COIN));
        catalog.insert(icons::FENCER, fight(1, 2, icons::SWORD));
        catalog.insert(icons::DRAGON, fight(2, 5, icons::BOLT));

        catalog.insert(
            icons::BEAR,
            toll(&[icons::HONEY], "Grrr", "Grrrrrrrr!!!", "Zzz..."),
        );
        catalog.insert(
            icons::TROLL,
            toll(
                &[icons::COIN],
                "There's no path here",
                "Come back with 💰",
                "Thank you for your payment - 💰",
            ),
        );

        catalog.insert(icons::ROCK, Behavior::Mine);
        catalog.insert(icons::SHIP, Behavior::Ship { is_repaired: false });
        catalog.insert(icons::RADIO, audio("zoldath2"));
        catalog.insert(icons::DRUM, audio("metronome1"));
        catalog.insert(icons::TRUMPET, audio("metronome2"));

        catalog.insert(
            icons::BEAVER,
            trade(
                &[icons::LOG, icons::LOG, icons::LOG],
                &[icons::COIN],
                "I'm tired, I'll buy 🪵🪵🪵 at a time.",
                "Yum - mmmmm - yummy!",
                true,
            ),
        );
        catalog.insert(
            icons::SQUIRREL,
            Behavior::Planter {
                input: strings(&[icons::ACORN]),
                output: strings(&[icons::SEEDLING]),
                request_text: "🌰?".to_string(),
            },
        );
        catalog.insert(
            icons::PARROT,
            Behavior::Bird {
                output: icons::ACORN.to_string(),
            },
        );
        catalog.insert(icons::CAKE_SLICE, Behavior::Eat { heal: 1 });
        catalog.insert(icons::BIRTHDAY_CAKE, Behavior::Eat { heal: 3 });
        catalog.insert(
            icons::CHARGER,
            trade(
                &[icons::LOW_BATTERY, icons::COIN, icons::COIN],
                &[icons::BATTERY],
                "Please insert 💰💰 to charge",
                "BRRRRRZT - ding!",
                false,
            ),
        );
        catalog.insert(icons::VOLCANO, Behavior::Hurt { damage: 1 });
        catalog.insert(icons::FIRE, Behavior::Hurt { damage: 1 });

        catalog.insert_timer(
            icons::SEEDLING,
            TimerBehavior::Grow {
                elapsed_time: 0,
                target_time: 5,
                new_entity: icons::DECIDUOUS_TREE.to_string(),
            },
        );
        catalog.insert_timer(icons::VOLCANO, TimerBehavior::Flammable);
        catalog.insert_timer(icons::FIRE, TimerBehavior::Flammable);

        catalog
    }

    /// Apply `[[entity]]` overrides from a TOML document on top of this catalog.
    ///
    /// ```toml
    /// [[entity]]
    /// icon = "🦖"
    /// behavior = { type = "fight", damage = 3, health = 6, drop = "🦴" }
    /// ```
    pub fn with_overrides(mut self, text: &str) -> Result<Self, RulesError> {
        let file: CatalogFile = toml::from_str(text)?;

        for record in file.entity {
            if record.icon.is_empty() {
                return Err(RulesError::EmptyIcon);
            }
            if let Some(behavior) = record.behavior {
                self.insert(&record.icon, behavior);
            }
            if let Some(timer) = record.timer {
                self.insert_timer(&record.icon, timer);
            }
        }

        Ok(self)
    }

    /// Set the default behavior for an icon.
    pub fn insert(&mut self, icon: &str, behavior: Behavior) {
        self.behaviors.insert(icon.to_string(), behavior);
    }

    /// Set the default timer behavior for an icon.
    pub fn insert_timer(&mut self, icon: &str, timer: TimerBehavior) {
        self.timers.insert(icon.to_string(), timer);
    }

    pub fn behavior_for(&self, icon: &str) -> Behavior {
        self.behaviors.get(icon).cloned().unwrap_or_default()
    }

    pub fn timer_for(&self, icon: &str) -> TimerBehavior {
        self.timers.get(icon).cloned().unwrap_or_default()
    }

    /// Instantiate a fresh entity for `icon` with a new id and no dialogue.
    pub fn create(&self, icon: &str, location: Location) -> Entity {
        Entity {
            id: EntityId::new(),
            icon: icon.to_string(),
            location,
            behavior: self.behavior_for(icon),
            timer_behavior: self.timer_for(icon),
            text: String::new(),
        }
    }
}

fn strings(icons: &[&str]) -> Vec<String> {
    icons.iter().map(|icon| icon.to_string()).collect()
}

fn fight(damage: i32, health: i32, drop: &str) -> Behavior {
    Behavior::Fight {
        damage,
        health,
        drop: drop.to_string(),
    }
}

fn audio(track: &str) -> Behavior {
    Behavior::Audio {
        track: track.to_string(),
    }
}

fn toll(input: &[&str], blocked_text: &str, request_text: &str, satisfied_text: &str) -> Behavior {
    Behavior::Toll {
        input: strings(input),
        blocked_text: blocked_text.to_string(),
        request_text: request_text.to_string(),
        satisfied_text: satisfied_text.to_string(),
    }
}

fn trade(
    input: &[&str],
    output: &[&str],
    request_text: &str,
    satisfied_text: &str,
    reusable: bool,
) -> Behavior {
    Behavior::Trade {
        request_text: request_text.to_string(),
        satisfied_text: satisfied_text.to_string(),
        input: strings(input),
        output: strings(output),
        has_traded: false,
        reusable,
    }
}
