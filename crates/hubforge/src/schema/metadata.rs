//! Numeric metadata properties.

use serde::{Deserialize, Serialize};

use crate::feature::PrimitiveType;

/// Storage type of a metadata property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataType {
    Int32,
    Int64,
    Float32,
    Float64,
}

impl MetadataType {
    /// Map a numeric primitive type. Non-numeric types yield `None`.
    pub fn from_primitive(primitive: &PrimitiveType) -> Option<Self> {
        match primitive {
            PrimitiveType::Int32 => Some(MetadataType::Int32),
            PrimitiveType::Int64 => Some(MetadataType::Int64),
            PrimitiveType::Float32 => Some(MetadataType::Float32),
            PrimitiveType::Float64 => Some(MetadataType::Float64),
            PrimitiveType::String | PrimitiveType::Other(_) => None,
        }
    }
}

/// A numeric, non-annotatable record attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub metadata_type: MetadataType,
}

impl MetadataProperty {
    pub fn new(name: impl Into<String>, metadata_type: MetadataType) -> Self {
        Self {
            name: name.into(),
            metadata_type,
        }
    }
}
