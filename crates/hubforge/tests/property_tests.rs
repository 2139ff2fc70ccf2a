//! Property-based tests for hubforge inference invariants.
//!
//! These tests use proptest to generate random feature mappings and verify
//! that every subset stays annotatable and that metadata mirrors the
//! numeric columns exactly.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p hubforge --test property_tests
//!
//! PROPTEST_CASES=10000 cargo test -p hubforge --test property_tests
//! ```

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use hubforge::{DatasetCreationBuilder, FieldInputType, QuestionKind, Subset};

// =============================================================================
// Test Strategies
// =============================================================================

const NUMERIC: &[&str] = &["int32", "int64", "float32", "float64"];

/// Generate one raw feature entry.
fn raw_feature() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({"dtype": "string", "_type": "Value"})),
        Just(json!({"_type": "Image"})),
        Just(json!({
            "content": {"dtype": "string", "_type": "Value"},
            "role": {"dtype": "string", "_type": "Value"}
        })),
        prop::sample::select(NUMERIC).prop_map(|dtype| json!({"dtype": dtype, "_type": "Value"})),
        (prop::sample::select(NUMERIC), prop::collection::vec("[a-z]{1,8}", 0..5))
            .prop_map(|(dtype, names)| json!({"dtype": dtype, "_type": "ClassLabel", "names": names})),
        Just(json!({"dtype": "bool", "_type": "Value"})),
        Just(json!({"feature": {"dtype": "string", "_type": "Value"}, "_type": "Sequence"})),
        Just(json!(null)),
    ]
}

/// Generate a subset descriptor with uniquely named columns.
fn subset_descriptor() -> impl Strategy<Value = Value> {
    prop::collection::vec(raw_feature(), 0..12).prop_map(|entries| {
        let features: Map<String, Value> = entries
            .into_iter()
            .enumerate()
            .map(|(i, raw)| (format!("col_{i}"), raw))
            .collect();
        json!({ "features": features })
    })
}

fn is_numeric_dtype(raw: &Value) -> bool {
    raw.get("dtype")
        .and_then(Value::as_str)
        .is_some_and(|dtype| NUMERIC.contains(&dtype))
}

// =============================================================================
// Subset Properties
// =============================================================================

proptest! {
    /// Every subset has at least one field and one question.
    #[test]
    fn always_annotatable(descriptor in subset_descriptor()) {
        let subset = Subset::from_descriptor("default", &descriptor).unwrap();
        prop_assert!(!subset.fields().is_empty());
        prop_assert!(!subset.questions().is_empty());
    }

    /// A sole field is required; with several fields none is.
    #[test]
    fn required_promotion(descriptor in subset_descriptor()) {
        let subset = Subset::from_descriptor("default", &descriptor).unwrap();
        let required = subset.fields().iter().filter(|f| f.required).count();

        if subset.fields().len() == 1 {
            prop_assert_eq!(required, 1);
        } else {
            prop_assert_eq!(required, 0);
        }
    }

    /// The fallback field appears exactly when nothing is annotatable.
    #[test]
    fn fallback_field(descriptor in subset_descriptor()) {
        let subset = Subset::from_descriptor("default", &descriptor).unwrap();
        let inferred = subset.features().iter().filter(|f| {
            hubforge::inference::FieldKind::classify(f) != hubforge::inference::FieldKind::None
        }).count();

        if inferred == 0 {
            prop_assert_eq!(subset.fields().len(), 1);
            prop_assert_eq!(subset.fields()[0].name.as_str(), "prompt");
            prop_assert_eq!(subset.fields()[0].input_type, FieldInputType::Text);
            prop_assert!(subset.fields()[0].required);
        } else {
            prop_assert_eq!(subset.fields().len(), inferred);
        }
    }

    /// Without label columns the only question is the required comment.
    #[test]
    fn fallback_question(descriptor in subset_descriptor()) {
        let labels = descriptor["features"]
            .as_object()
            .unwrap()
            .values()
            .filter(|raw| raw.get("_type").and_then(Value::as_str) == Some("ClassLabel"))
            .count();
        let subset = Subset::from_descriptor("default", &descriptor).unwrap();

        if labels == 0 {
            prop_assert_eq!(subset.questions().len(), 1);
            prop_assert_eq!(subset.questions()[0].name.as_str(), "comment");
            prop_assert_eq!(subset.questions()[0].kind, QuestionKind::Text);
            prop_assert!(subset.questions()[0].required);
        } else {
            prop_assert_eq!(subset.questions().len(), labels);
            prop_assert!(subset.questions().iter().all(|q| q.kind == QuestionKind::LabelSelection));
        }
    }

    /// Metadata names are exactly the numeric columns, in column order.
    #[test]
    fn metadata_completeness(descriptor in subset_descriptor()) {
        let expected: Vec<String> = descriptor["features"]
            .as_object()
            .unwrap()
            .iter()
            .filter(|(_, raw)| is_numeric_dtype(raw))
            .map(|(name, _)| name.clone())
            .collect();
        let subset = Subset::from_descriptor("default", &descriptor).unwrap();
        let actual: Vec<String> = subset.metadata().iter().map(|m| m.name.clone()).collect();

        prop_assert_eq!(actual, expected);
    }

    /// Inference is deterministic.
    #[test]
    fn inference_is_deterministic(descriptor in subset_descriptor()) {
        let first = Subset::from_descriptor("default", &descriptor).unwrap();
        let second = Subset::from_descriptor("default", &descriptor).unwrap();

        prop_assert_eq!(first.fields(), second.fields());
        prop_assert_eq!(first.questions(), second.questions());
        prop_assert_eq!(first.metadata(), second.metadata());
    }
}

// =============================================================================
// Builder Properties
// =============================================================================

proptest! {
    /// Multi-subset descriptors yield every non-sentinel key, in order.
    #[test]
    fn multi_subset_names(descriptors in prop::collection::vec(subset_descriptor(), 1..5)) {
        let mut raw = Map::new();
        raw.insert("default".to_string(), json!(true));
        let mut expected = Vec::new();
        for (i, descriptor) in descriptors.into_iter().enumerate() {
            let name = format!("subset_{i}");
            expected.push(name.clone());
            raw.insert(name, descriptor);
        }

        let model = DatasetCreationBuilder::new(Value::Object(raw)).build().unwrap();
        prop_assert_eq!(model.subsets(), expected.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(model.has_more_than_one_subset(), expected.len() > 1);
        prop_assert_eq!(model.selected_subset_name(), "subset_0");
    }

    /// Rejected selections never move the current selection.
    #[test]
    fn unknown_selection_is_inert(name in "[a-z]{1,10}") {
        let raw = json!({
            "default": true,
            "train": {"features": {"text": {"dtype": "string", "_type": "Value"}}},
            "test": {"features": {"image": {"_type": "Image"}}}
        });
        let mut model = DatasetCreationBuilder::new(raw).build().unwrap();
        model.change_subset("test").unwrap();

        let result = model.change_subset(&name);
        if name == "train" || name == "test" {
            prop_assert!(result.is_ok());
            prop_assert_eq!(model.selected_subset_name(), name.as_str());
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(model.selected_subset_name(), "test");
        }
    }
}
