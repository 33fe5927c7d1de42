//! Behaviors: how an entity reacts to the player, and how it evolves over time.

use serde::{Deserialize, Serialize};

/// What happens when the player moves into an entity's cell.
///
/// The variant is fixed when the entity is created. Fields such as `health` or
/// `has_traded` change only by replacing the whole entity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Behavior {
    /// `damage` dealt to the player per exchange, `health` hits left, `drop` left behind on death.
    Fight {
        damage: i32,
        health: i32,
        drop: String,
    },
    Talk {
        text: String,
    },
    Eat {
        heal: i32,
    },
    Chop,
    Mine,
    Item,
    #[default]
    None,
    Audio {
        track: String,
    },
    Ship {
        #[serde(default)]
        is_repaired: bool,
    },
    Trample,
    Hurt {
        damage: i32,
    },
    /// Blocks passage until `input` is paid, then lets the player through.
    Toll {
        input: Vec<String>,
        blocked_text: String,
        request_text: String,
        satisfied_text: String,
    },
    Replace {
        new_entity: String,
    },
    /// Takes `input` and plants `output[0]` somewhere random.
    Planter {
        input: Vec<String>,
        output: Vec<String>,
        request_text: String,
    },
    /// Flies off when bumped, leaving `output` behind.
    Bird {
        output: String,
    },
    Trade {
        request_text: String,
        satisfied_text: String,
        input: Vec<String>,
        output: Vec<String>,
        #[serde(default)]
        has_traded: bool,
        /// Reusable trades never become `has_traded`.
        #[serde(default)]
        reusable: bool,
    },
}

/// The tag of a [`Behavior`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorKind {
    Fight,
    Talk,
    Eat,
    Chop,
    Mine,
    Item,
    None,
    Audio,
    Ship,
    Trample,
    Hurt,
    Toll,
    Replace,
    Planter,
    Bird,
    Trade,
}

impl Behavior {
    pub fn kind(&self) -> BehaviorKind {
        match self {
            Behavior::Fight { .. } => BehaviorKind::Fight,
            Behavior::Talk { .. } => BehaviorKind::Talk,
            Behavior::Eat { .. } => BehaviorKind::Eat,
            Behavior::Chop => BehaviorKind::Chop,
            Behavior::Mine => BehaviorKind::Mine,
            Behavior::Item => BehaviorKind::Item,
            Behavior::None => BehaviorKind::None,
            Behavior::Audio { .. } => BehaviorKind::Audio,
            Behavior::Ship { .. } => BehaviorKind::Ship,
            Behavior::Trample => BehaviorKind::Trample,
            Behavior::Hurt { .. } => BehaviorKind::Hurt,
            Behavior::Toll { .. } => BehaviorKind::Toll,
            Behavior::Replace { .. } => BehaviorKind::Replace,
            Behavior::Planter { .. } => BehaviorKind::Planter,
            Behavior::Bird { .. } => BehaviorKind::Bird,
            Behavior::Trade { .. } => BehaviorKind::Trade,
        }
    }
}

impl BehaviorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorKind::Fight => "fight",
            BehaviorKind::Talk => "talk",
            BehaviorKind::Eat => "eat",
            BehaviorKind::Chop => "chop",
            BehaviorKind::Mine => "mine",
            BehaviorKind::Item => "item",
            BehaviorKind::None => "none",
            BehaviorKind::Audio => "audio",
            BehaviorKind::Ship => "ship",
            BehaviorKind::Trample => "trample",
            BehaviorKind::Hurt => "hurt",
            BehaviorKind::Toll => "toll",
            BehaviorKind::Replace => "replace",
            BehaviorKind::Planter => "planter",
            BehaviorKind::Bird => "bird",
            BehaviorKind::Trade => "trade",
        }
    }
}

impl std::fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Passive evolution, advanced once per accepted player move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimerBehavior {
    #[default]
    None,
    /// Sets neighboring trees on fire.
    Flammable,
    /// Turns into `new_entity` once `elapsed_time` reaches `target_time` moves.
    Grow {
        #[serde(default)]
        elapsed_time: u32,
        target_time: u32,
        new_entity: String,
    },
}
