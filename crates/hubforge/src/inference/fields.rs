//! Field inference: which columns become annotatable inputs.

use crate::config::DEFAULT_FALLBACK_FIELD;
use crate::feature::{FeatureDescriptor, FeatureKind};
use crate::schema::Field;

/// Classification of a single feature as an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Image,
    Chat,
    None,
}

impl FieldKind {
    /// Classify a feature. The cases are mutually exclusive.
    pub fn classify(feature: &FeatureDescriptor) -> Self {
        match feature.kind {
            FeatureKind::Value if feature.is_string_value() => FieldKind::Text,
            FeatureKind::Image => FieldKind::Image,
            FeatureKind::Chat => FieldKind::Chat,
            _ => FieldKind::None,
        }
    }

    /// Build the field this classification produces, if any.
    pub fn field(self, name: impl Into<String>) -> Option<Field> {
        match self {
            FieldKind::Text => Some(Field::text(name)),
            FieldKind::Image => Some(Field::image(name)),
            FieldKind::Chat => Some(Field::chat(name)),
            FieldKind::None => None,
        }
    }
}

/// Derives the annotatable fields of a subset.
#[derive(Debug, Clone)]
pub struct FieldInference {
    fallback_name: String,
}

impl FieldInference {
    pub fn new() -> Self {
        Self::with_fallback(DEFAULT_FALLBACK_FIELD)
    }

    /// Use a custom name for the fallback text field.
    pub fn with_fallback(fallback_name: impl Into<String>) -> Self {
        Self {
            fallback_name: fallback_name.into(),
        }
    }

    /// Infer fields in feature order.
    ///
    /// Always returns at least one field. A sole field is marked required;
    /// with two or more fields none is.
    pub fn infer(&self, features: &[FeatureDescriptor]) -> Vec<Field> {
        let mut fields: Vec<Field> = features
            .iter()
            .filter_map(|feature| {
                let kind = FieldKind::classify(feature);
                tracing::trace!(feature = %feature.name, ?kind, "classified field");
                kind.field(feature.name.clone())
            })
            .collect();

        if fields.is_empty() {
            tracing::warn!(field = %self.fallback_name, "no annotatable columns, using fallback field");
            fields.push(Field::text(self.fallback_name.clone()));
        }

        if let [only] = fields.as_mut_slice() {
            only.required = true;
        }

        fields
    }
}

impl Default for FieldInference {
    fn default() -> Self {
        Self::new()
    }
}
