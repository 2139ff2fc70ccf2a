//! Question inference: label-selection questions from categorical columns.

use crate::config::DEFAULT_FALLBACK_QUESTION;
use crate::feature::{FeatureDescriptor, FeatureKind};
use crate::schema::Question;

/// Derives the annotation questions of a subset.
#[derive(Debug, Clone)]
pub struct QuestionInference {
    fallback_name: String,
}

impl QuestionInference {
    pub fn new() -> Self {
        Self::with_fallback(DEFAULT_FALLBACK_QUESTION)
    }

    /// Use a custom name for the fallback text question.
    pub fn with_fallback(fallback_name: impl Into<String>) -> Self {
        Self {
            fallback_name: fallback_name.into(),
        }
    }

    /// Infer questions in feature order, falling back to a required
    /// free-text question when no `ClassLabel` column exists.
    pub fn infer(&self, features: &[FeatureDescriptor]) -> Vec<Question> {
        let mut questions: Vec<Question> = features
            .iter()
            .filter(|feature| feature.kind == FeatureKind::ClassLabel)
            .map(|feature| {
                Question::label_selection(
                    feature.name.clone(),
                    feature.label_names.clone().unwrap_or_default(),
                )
            })
            .collect();

        if questions.is_empty() {
            tracing::warn!(question = %self.fallback_name, "no label columns, using fallback question");
            questions.push(Question::text(self.fallback_name.clone(), true));
        }

        questions
    }
}

impl Default for QuestionInference {
    fn default() -> Self {
        Self::new()
    }
}
