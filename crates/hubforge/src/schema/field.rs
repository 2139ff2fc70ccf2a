//! Annotatable input fields.

use serde::{Deserialize, Serialize};

/// Input surface shown to an annotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldInputType {
    Text,
    Image,
    /// A conversation of role/content turns.
    Chat,
}

/// An annotatable column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Input surface.
    pub input_type: FieldInputType,
    /// Whether annotators must see this field populated.
    pub required: bool,
}

impl Field {
    /// Create a non-required field.
    pub fn new(name: impl Into<String>, input_type: FieldInputType) -> Self {
        Self {
            name: name.into(),
            input_type,
            required: false,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldInputType::Text)
    }

    pub fn image(name: impl Into<String>) -> Self {
        Self::new(name, FieldInputType::Image)
    }

    pub fn chat(name: impl Into<String>) -> Self {
        Self::new(name, FieldInputType::Chat)
    }
}
