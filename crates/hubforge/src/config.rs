//! Configuration for schema inference.

/// Name of the fallback text field inserted when no column is annotatable.
pub const DEFAULT_FALLBACK_FIELD: &str = "prompt";

/// Name of the fallback text question inserted when no label question exists.
pub const DEFAULT_FALLBACK_QUESTION: &str = "comment";

/// Top-level key marking a multi-subset descriptor. Also the name given to
/// the single subset of a flat descriptor.
pub const DEFAULT_SUBSET_SENTINEL: &str = "default";

/// Configuration for the inference passes and the dataset builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Name of the fallback field.
    pub fallback_field_name: String,
    /// Name of the fallback question.
    pub fallback_question_name: String,
    /// Sentinel key for multi-subset detection and the single-subset name.
    pub subset_sentinel: String,
    /// Also recognize chat columns wrapped in a list or a `Sequence`.
    pub detect_wrapped_chat: bool,
    /// Labels a document-classification layout must carry. Without them
    /// classification is never detected.
    pub preset_labels: Option<Vec<String>>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            fallback_field_name: DEFAULT_FALLBACK_FIELD.to_string(),
            fallback_question_name: DEFAULT_FALLBACK_QUESTION.to_string(),
            subset_sentinel: DEFAULT_SUBSET_SENTINEL.to_string(),
            detect_wrapped_chat: true,
            preset_labels: None,
        }
    }
}

impl InferenceConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback field name.
    pub fn with_fallback_field_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_field_name = name.into();
        self
    }

    /// Set the fallback question name.
    pub fn with_fallback_question_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_question_name = name.into();
        self
    }

    /// Set the multi-subset sentinel key.
    pub fn with_subset_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.subset_sentinel = sentinel.into();
        self
    }

    /// Enable or disable detection of list/`Sequence`-wrapped chat columns.
    pub fn with_wrapped_chat(mut self, enabled: bool) -> Self {
        self.detect_wrapped_chat = enabled;
        self
    }

    /// Set the labels used for document-classification detection.
    pub fn with_preset_labels(mut self, labels: Vec<String>) -> Self {
        self.preset_labels = Some(labels);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InferenceConfig::default();
        assert_eq!(config.fallback_field_name, "prompt");
        assert_eq!(config.fallback_question_name, "comment");
        assert_eq!(config.subset_sentinel, "default");
        assert!(config.detect_wrapped_chat);
        assert_eq!(config.preset_labels, None);
    }

    #[test]
    fn test_builder_setters() {
        let config = InferenceConfig::new()
            .with_fallback_field_name("text")
            .with_fallback_question_name("notes")
            .with_subset_sentinel("main")
            .with_wrapped_chat(false)
            .with_preset_labels(vec!["pos".to_string()]);

        assert_eq!(config.fallback_field_name, "text");
        assert_eq!(config.fallback_question_name, "notes");
        assert_eq!(config.subset_sentinel, "main");
        assert!(!config.detect_wrapped_chat);
        assert_eq!(config.preset_labels, Some(vec!["pos".to_string()]));
    }
}
