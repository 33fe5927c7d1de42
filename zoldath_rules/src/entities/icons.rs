//! Icons the rules refer to by name.

pub const PLAYER: &str = "👨‍🚀";

pub const SWORD: &str = "🗡️";
pub const AXE: &str = "🪓";
pub const LOG: &str = "🪵";
pub const GEAR: &str = "⚙️";
pub const TOOLS: &str = "🛠️";
pub const BOLT: &str = "🔩";
pub const COIN: &str = "💰";
pub const HONEY: &str = "🍯";
pub const HELICOPTER: &str = "🚁";
pub const ACORN: &str = "🌰";
pub const BATTERY: &str = "🔋";
pub const LOW_BATTERY: &str = "🪫";
pub const PICKAXE: &str = "⛏️";

pub const DECIDUOUS_TREE: &str = "🌳";
pub const EVERGREEN_TREE: &str = "🌲";
pub const SEEDLING: &str = "🌱";
pub const FIRE: &str = "🔥";
pub const VOLCANO: &str = "🌋";
pub const ROCK: &str = "🪨";
pub const MUSHROOM: &str = "🍄";

pub const SHIP: &str = "🛸";
pub const ALIEN: &str = "👽";
pub const ROBOT: &str = "🤖";
pub const FIREFIGHTER: &str = "🧑‍🚒";
pub const BEE: &str = "🐝";
pub const OGRE: &str = "👹";
pub const FENCER: &str = "🤺";
pub const DRAGON: &str = "🐉";
pub const BEAR: &str = "🐻";
pub const TROLL: &str = "🧌";
pub const BEAVER: &str = "🦫";
pub const SQUIRREL: &str = "🐿️";
pub const PARROT: &str = "🦜";
pub const CAKE_SLICE: &str = "🍰";
pub const BIRTHDAY_CAKE: &str = "🎂";
pub const CHARGER: &str = "🎛️";
pub const RADIO: &str = "📻";
pub const DRUM: &str = "🥁";
pub const TRUMPET: &str = "🎺";

/// Trees that catch fire from a neighboring flammable entity.
pub const BURNABLE: [&str; 2] = [DECIDUOUS_TREE, EVERGREEN_TREE];

/// Parts that must all be carried to repair the ship.
pub const SHIP_PARTS: [&str; 3] = [TOOLS, GEAR, BOLT];

/// Parts consumed by the repair. The tools are kept.
pub const SHIP_PARTS_CONSUMED: [&str; 2] = [GEAR, BOLT];
