//! Stat identifiers shared by monster attributes and map requirements
//!
//! These are the designations of the attribute definitions in the shared
//! catalog. Map content refers to attributes only through these names.

pub const LEVEL: &str = "Level";
pub const MAXIMUM_HEALTH: &str = "Maximum Health";
pub const MINIMUM_PHYSICAL_DAMAGE: &str = "Minimum Physical Damage";
pub const MAXIMUM_PHYSICAL_DAMAGE: &str = "Maximum Physical Damage";
pub const DEFENSE_BASE: &str = "Defense Base";
pub const ATTACK_RATE: &str = "Attack Rate";
pub const DEFENSE_RATE: &str = "Defense Rate";
pub const CAN_FLY: &str = "Can Fly";
pub const RESETS: &str = "Resets";

/// Designation and description of every attribute definition in the catalog
pub const ATTRIBUTE_CATALOG: &[(&str, &str)] = &[
    (LEVEL, "The level of the character or monster."),
    (MAXIMUM_HEALTH, "The maximum health points."),
    (MINIMUM_PHYSICAL_DAMAGE, "The lower bound of physical damage."),
    (MAXIMUM_PHYSICAL_DAMAGE, "The upper bound of physical damage."),
    (DEFENSE_BASE, "The base defense value."),
    (ATTACK_RATE, "The rate used to decide if an attack hits."),
    (DEFENSE_RATE, "The rate used to decide if an attack is blocked."),
    (CAN_FLY, "Set to 1 when wings or a flying pet are equipped."),
    (RESETS, "The number of character resets."),
];
