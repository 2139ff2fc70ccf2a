//! A single dataset partition and its derived annotation schema.

use serde::Serialize;
use serde_json::Value;

use crate::config::InferenceConfig;
use crate::error::Result;
use crate::feature::{normalize_features, FeatureDescriptor};
use crate::inference::{detect_preset, infer_metadata, FieldInference, QuestionInference, TaskPreset};
use crate::schema::{Field, MetadataProperty, Question};

/// One named dataset partition with its derived fields, questions and
/// metadata. All inference runs once, at construction.
#[derive(Debug, Clone, Serialize)]
pub struct Subset {
    name: String,
    #[serde(skip)]
    features: Vec<FeatureDescriptor>,
    fields: Vec<Field>,
    questions: Vec<Question>,
    metadata: Vec<MetadataProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preset: Option<TaskPreset>,
}

impl Subset {
    /// Build a subset from its raw descriptor using default configuration.
    pub fn from_descriptor(name: impl Into<String>, descriptor: &Value) -> Result<Self> {
        Self::with_config(name, descriptor, &InferenceConfig::default())
    }

    /// Build a subset from its raw descriptor.
    ///
    /// Fails with a structural error when the descriptor has no
    /// `features` mapping.
    pub fn with_config(
        name: impl Into<String>,
        descriptor: &Value,
        config: &InferenceConfig,
    ) -> Result<Self> {
        let name = name.into();
        let features = normalize_features(&name, descriptor, config)?;
        Ok(Self::from_features(name, features, config))
    }

    /// Build a subset from already-normalized features.
    pub fn from_features(
        name: impl Into<String>,
        features: Vec<FeatureDescriptor>,
        config: &InferenceConfig,
    ) -> Self {
        let name = name.into();
        let fields = FieldInference::with_fallback(config.fallback_field_name.clone()).infer(&features);
        let questions =
            QuestionInference::with_fallback(config.fallback_question_name.clone()).infer(&features);
        let metadata = infer_metadata(&features);
        let preset = detect_preset(&features, config.preset_labels.as_deref());

        tracing::debug!(
            subset = %name,
            features = features.len(),
            fields = fields.len(),
            questions = questions.len(),
            metadata = metadata.len(),
            ?preset,
            "built subset"
        );

        Self {
            name,
            features,
            fields,
            questions,
            metadata,
            preset,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized features, in input order.
    pub fn features(&self) -> &[FeatureDescriptor] {
        &self.features
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn metadata(&self) -> &[MetadataProperty] {
        &self.metadata
    }

    /// Well-known task layout these features match, if any.
    pub fn preset(&self) -> Option<TaskPreset> {
        self.preset
    }
}
