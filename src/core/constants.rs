// Starting hero
pub const DEFAULT_HERO_NAME: &str = "Hero";
pub const HERO_START_HP: u32 = 50;
pub const HERO_START_ATTACK: u32 = 3;
pub const MAX_NAME_LEN: usize = 16;

// Encounters and loot (percent chances)
pub const ENCOUNTER_CHANCE_PERCENT: u32 = 30;
pub const POTION_DROP_CHANCE_PERCENT: u32 = 30;
pub const ENEMY_GOLD_MIN: u32 = 8;
pub const ENEMY_GOLD_MAX: u32 = 100;

// Shop prices
pub const POTION_PRICE: u32 = 5;
pub const ELIXIR_PRICE: u32 = 8;
pub const WEAPON_UPGRADE_PRICE: u32 = 10;
pub const WEAPON_UPGRADE_ATTACK: u32 = 2;

// The major only hands over the cave key to heroes at least this strong
pub const MAJOR_ATTACK_THRESHOLD: u32 = 10;

// Save system
pub const SAVE_DIR_NAME: &str = ".mofdin";
pub const SAVE_FILE_NAME: &str = "player.json";

// Presentation
pub const SEPARATOR_LINE: &str = "Xx-------------------------------------------xX";
pub const CHOICE_PROMPT: &str = "# ";
pub const PAUSE_PROMPT: &str = "> ";
