//! Monster definition entity - Catalog entries for monsters, NPCs and objects

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AttributeDefinitionId, MonsterDefinitionId};

/// A monster, NPC or map object that spawn areas can place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterDefinition {
    pub id: MonsterDefinitionId,
    /// Catalog key used by map content to reference this definition
    pub number: u16,
    pub designation: String,
    pub kind: MonsterKind,
    pub attributes: Vec<MonsterAttributeValue>,
}

impl MonsterDefinition {
    pub fn new(
        id: MonsterDefinitionId,
        number: u16,
        designation: impl Into<String>,
        kind: MonsterKind,
    ) -> Self {
        Self {
            id,
            number,
            designation: designation.into(),
            kind,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: AttributeDefinitionId, value: f32) -> Self {
        self.attributes.push(MonsterAttributeValue::new(attribute, value));
        self
    }
}

/// What kind of object a monster definition describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    /// Attackable monster
    Monster,
    /// Non-player character offering services or dialog
    Npc,
    /// Guard protecting a safe area
    Guard,
    /// Stationary trap damaging nearby players
    Trap,
    /// Object that can be destroyed, e.g. a castle gate
    Destructible,
}

impl MonsterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MonsterKind::Monster => "monster",
            MonsterKind::Npc => "npc",
            MonsterKind::Guard => "guard",
            MonsterKind::Trap => "trap",
            MonsterKind::Destructible => "destructible",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "monster" => Some(MonsterKind::Monster),
            "npc" => Some(MonsterKind::Npc),
            "guard" => Some(MonsterKind::Guard),
            "trap" => Some(MonsterKind::Trap),
            "destructible" => Some(MonsterKind::Destructible),
            _ => None,
        }
    }
}

/// The value of one attribute of a monster
///
/// The attribute definition is shared with every other monster and requirement
/// using the same stat; it is referenced, never copied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonsterAttributeValue {
    pub attribute_definition: AttributeDefinitionId,
    pub value: f32,
}

impl MonsterAttributeValue {
    pub fn new(attribute_definition: AttributeDefinitionId, value: f32) -> Self {
        Self {
            attribute_definition,
            value,
        }
    }
}
