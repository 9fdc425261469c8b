//! Attribute definition entity - A stat that monsters have and maps can require

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AttributeDefinitionId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub id: AttributeDefinitionId,
    /// Unique name within the catalog, e.g. "Level"
    pub designation: String,
    pub description: String,
}

impl AttributeDefinition {
    pub fn new(id: AttributeDefinitionId, designation: impl Into<String>) -> Self {
        Self {
            id,
            designation: designation.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
