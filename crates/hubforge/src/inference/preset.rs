//! Task preset detection: recognize well-known dataset layouts.
//!
//! A preset matches when the subset has every column the preset names
//! with the expected feature shape. Extra columns are ignored.

use std::fmt;

use serde::Serialize;

use crate::feature::{FeatureDescriptor, FeatureKind, PrimitiveType};

/// A well-known annotation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPreset {
    /// Pick one label per document.
    DocumentClassification,
    /// Rank competing responses to a prompt.
    ResponseRanking,
    /// Rate a single response.
    ResponseRating,
}

impl TaskPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPreset::DocumentClassification => "document_classification",
            TaskPreset::ResponseRanking => "response_ranking",
            TaskPreset::ResponseRating => "response_rating",
        }
    }

    /// Annotator guidelines for the task.
    pub fn guidelines(&self) -> &'static str {
        match self {
            TaskPreset::DocumentClassification => "Select a label for the document.",
            TaskPreset::ResponseRanking => "Rank the responses.",
            TaskPreset::ResponseRating => "Rate the response.",
        }
    }
}

impl fmt::Display for TaskPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected shape of one preset column.
#[derive(Debug, Clone, Copy)]
enum Shape {
    Text,
    Labels,
    Conversation,
}

type Layout = &'static [(&'static str, Shape)];

const CLASSIFICATION_LAYOUTS: &[Layout] = &[
    &[("text", Shape::Text), ("label", Shape::Labels)],
    &[("document", Shape::Text), ("sentiment", Shape::Labels)],
    &[("content", Shape::Text), ("category", Shape::Labels)],
];

const RANKING_LAYOUTS: &[Layout] = &[
    &[
        ("prompt", Shape::Text),
        ("chosen", Shape::Conversation),
        ("rejected", Shape::Conversation),
    ],
    &[
        ("instruction", Shape::Text),
        ("input", Shape::Text),
        ("response1", Shape::Text),
        ("response2", Shape::Text),
    ],
    &[
        ("question", Shape::Text),
        ("answer1", Shape::Text),
        ("answer2", Shape::Text),
    ],
];

const RATING_LAYOUTS: &[Layout] = &[
    &[
        ("instruction", Shape::Text),
        ("input", Shape::Text),
        ("output", Shape::Text),
    ],
    &[("prompt", Shape::Text), ("response", Shape::Text)],
    &[("question", Shape::Text), ("answer", Shape::Text)],
];

/// Detect the task preset a subset's features match, if any.
///
/// Classification is only considered when `labels` is given; its label
/// column must carry exactly those labels (in any order). Presets are
/// tried in order: classification, ranking, rating.
pub fn detect_preset(
    features: &[FeatureDescriptor],
    labels: Option<&[String]>,
) -> Option<TaskPreset> {
    let sorted_labels = labels.map(|labels| {
        let mut sorted = labels.to_vec();
        sorted.sort();
        sorted
    });

    let candidates: [(TaskPreset, &[Layout], bool); 3] = [
        (TaskPreset::DocumentClassification, CLASSIFICATION_LAYOUTS, sorted_labels.is_some()),
        (TaskPreset::ResponseRanking, RANKING_LAYOUTS, true),
        (TaskPreset::ResponseRating, RATING_LAYOUTS, true),
    ];

    let preset = candidates
        .into_iter()
        .filter(|(_, _, enabled)| *enabled)
        .find(|(_, layouts, _)| {
            layouts
                .iter()
                .any(|layout| matches_layout(features, *layout, sorted_labels.as_deref()))
        })
        .map(|(preset, _, _)| preset);

    tracing::trace!(?preset, "detected task preset");
    preset
}

fn matches_layout(features: &[FeatureDescriptor], layout: Layout, labels: Option<&[String]>) -> bool {
    layout.iter().all(|(name, shape)| {
        features
            .iter()
            .find(|feature| feature.name == *name)
            .is_some_and(|feature| matches_shape(feature, *shape, labels))
    })
}

fn matches_shape(feature: &FeatureDescriptor, shape: Shape, labels: Option<&[String]>) -> bool {
    match shape {
        Shape::Text => feature.is_string_value(),
        Shape::Conversation => feature.kind == FeatureKind::Chat,
        Shape::Labels => {
            let Some(labels) = labels else {
                return false;
            };
            let integer_codes = matches!(feature.primitive_type, None | Some(PrimitiveType::Int64));
            let same_labels = feature.label_names.as_ref().is_some_and(|names| {
                let mut names = names.clone();
                names.sort();
                names == labels
            });
            feature.kind == FeatureKind::ClassLabel && integer_codes && same_labels
        }
    }
}
