//! Annotation questions.

use serde::{Deserialize, Serialize};

/// Kind of annotation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Pick one label from a fixed set of options.
    LabelSelection,
    /// Free text.
    Text,
}

/// An annotation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub name: String,
    pub required: bool,
    pub kind: QuestionKind,
    /// Selectable labels, only for `LabelSelection`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub options: Option<Vec<String>>,
}

impl Question {
    /// Create an optional label-selection question.
    pub fn label_selection(name: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            kind: QuestionKind::LabelSelection,
            options: Some(options),
        }
    }

    /// Create a free-text question.
    pub fn text(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            kind: QuestionKind::Text,
            options: None,
        }
    }
}
