//! Core type definitions for normalized feature descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared kind of a dataset feature (the `_type` discriminator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FeatureKind {
    /// Scalar value column.
    Value,
    /// Image column.
    Image,
    /// Categorical column with named labels.
    ClassLabel,
    /// Conversation column folded in by the chat pre-pass.
    Chat,
    /// Any other discriminator, kept verbatim. Empty when `_type` is absent.
    Other(String),
}

impl FeatureKind {
    /// Parse a raw `_type` discriminator. `Chat` is never a raw
    /// discriminator; it only comes from the chat pre-pass.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Value" => FeatureKind::Value,
            "Image" => FeatureKind::Image,
            "ClassLabel" => FeatureKind::ClassLabel,
            other => FeatureKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FeatureKind::Value => "Value",
            FeatureKind::Image => "Image",
            FeatureKind::ClassLabel => "ClassLabel",
            FeatureKind::Chat => "Chat",
            FeatureKind::Other(raw) => raw,
        }
    }
}

impl From<String> for FeatureKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Chat" => FeatureKind::Chat,
            other => FeatureKind::parse(other),
        }
    }
}

impl From<FeatureKind> for String {
    fn from(kind: FeatureKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared primitive storage type of a feature (the `dtype` field).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrimitiveType {
    String,
    Int32,
    Int64,
    Float32,
    Float64,
    /// Any other dtype (`bool`, `int8`, `float16`, ...), kept verbatim.
    Other(std::string::String),
}

impl PrimitiveType {
    /// Parse a `dtype` string.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "string" => PrimitiveType::String,
            "int32" => PrimitiveType::Int32,
            "int64" => PrimitiveType::Int64,
            "float32" => PrimitiveType::Float32,
            "float64" => PrimitiveType::Float64,
            other => PrimitiveType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Int32 => "int32",
            PrimitiveType::Int64 => "int64",
            PrimitiveType::Float32 => "float32",
            PrimitiveType::Float64 => "float64",
            PrimitiveType::Other(raw) => raw,
        }
    }

    /// Returns true if this type maps to a numeric metadata property.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PrimitiveType::Int32 | PrimitiveType::Int64 | PrimitiveType::Float32 | PrimitiveType::Float64
        )
    }
}

impl From<std::string::String> for PrimitiveType {
    fn from(raw: std::string::String) -> Self {
        PrimitiveType::parse(&raw)
    }
}

impl From<PrimitiveType> for std::string::String {
    fn from(primitive: PrimitiveType) -> Self {
        primitive.as_str().to_string()
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized representation of one raw dataset column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    /// Column name.
    pub name: String,
    /// Declared kind.
    pub kind: FeatureKind,
    /// Declared primitive type, absent when the raw feature has no `dtype`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub primitive_type: Option<PrimitiveType>,
    /// Label names, only for `ClassLabel` features.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label_names: Option<Vec<String>>,
}

impl FeatureDescriptor {
    /// Create a descriptor with no primitive type or labels.
    pub fn new(name: impl Into<String>, kind: FeatureKind) -> Self {
        Self {
            name: name.into(),
            kind,
            primitive_type: None,
            label_names: None,
        }
    }

    pub fn with_primitive_type(mut self, primitive: PrimitiveType) -> Self {
        self.primitive_type = Some(primitive);
        self
    }

    pub fn with_label_names(mut self, names: Vec<String>) -> Self {
        self.label_names = Some(names);
        self
    }

    /// Returns true for a `Value` feature of primitive type `string`.
    pub fn is_string_value(&self) -> bool {
        self.kind == FeatureKind::Value && self.primitive_type == Some(PrimitiveType::String)
    }
}
