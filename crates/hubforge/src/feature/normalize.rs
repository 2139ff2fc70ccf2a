//! Raw feature normalization with chat-shape detection.

use serde_json::{Map, Value};

use crate::config::InferenceConfig;
use crate::error::{HubforgeError, Result};

use super::types::{FeatureDescriptor, FeatureKind, PrimitiveType};

/// Key holding the column mapping inside a subset descriptor.
const FEATURES_KEY: &str = "features";

/// Normalize the `features` mapping of one subset descriptor.
///
/// Column order follows the insertion order of the raw mapping. Entries
/// whose shape is not recognized become `FeatureKind::Other` and are
/// ignored by every inference pass.
pub fn normalize_features(
    subset: &str,
    descriptor: &Value,
    config: &InferenceConfig,
) -> Result<Vec<FeatureDescriptor>> {
    let object = descriptor.as_object().ok_or_else(|| {
        HubforgeError::structural(subset, "subset descriptor is not a JSON object")
    })?;

    let features = object
        .get(FEATURES_KEY)
        .ok_or_else(|| HubforgeError::structural(subset, "missing key 'features'"))?
        .as_object()
        .ok_or_else(|| HubforgeError::structural(subset, "'features' is not a JSON object"))?;

    Ok(features
        .iter()
        .map(|(name, raw)| normalize_feature(name, raw, config))
        .collect())
}

/// Normalize a single raw column entry.
pub fn normalize_feature(name: &str, raw: &Value, config: &InferenceConfig) -> FeatureDescriptor {
    if is_chat_shape(raw, config.detect_wrapped_chat) {
        tracing::trace!(feature = name, "detected chat shape");
        return FeatureDescriptor::new(name, FeatureKind::Chat);
    }

    let Some(object) = raw.as_object() else {
        return FeatureDescriptor::new(name, FeatureKind::Other(String::new()));
    };

    let kind = object
        .get("_type")
        .and_then(Value::as_str)
        .map(FeatureKind::parse)
        .unwrap_or_else(|| FeatureKind::Other(String::new()));

    let primitive_type = object
        .get("dtype")
        .and_then(Value::as_str)
        .map(PrimitiveType::parse);

    let label_names = match kind {
        FeatureKind::ClassLabel => Some(label_names(object)),
        _ => None,
    };

    FeatureDescriptor {
        name: name.to_string(),
        kind,
        primitive_type,
        label_names,
    }
}

/// Collect the string entries of a `ClassLabel`'s `names` array.
fn label_names(object: &Map<String, Value>) -> Vec<String> {
    object
        .get("names")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Check whether a raw entry describes a conversation column.
///
/// The bare form is an object with `role` and `content` sub-features that
/// are both string values. With `wrapped` set, a one-element list holding
/// that object and a `Sequence` whose `feature` is that object also match.
pub fn is_chat_shape(raw: &Value, wrapped: bool) -> bool {
    if is_role_content_object(raw) {
        return true;
    }
    if !wrapped {
        return false;
    }

    match raw {
        Value::Array(items) => items.len() == 1 && is_role_content_object(&items[0]),
        Value::Object(object) => {
            object.get("_type").and_then(Value::as_str) == Some("Sequence")
                && object.get("feature").is_some_and(is_role_content_object)
        }
        _ => false,
    }
}

fn is_role_content_object(raw: &Value) -> bool {
    let Some(object) = raw.as_object() else {
        return false;
    };
    ["role", "content"]
        .iter()
        .all(|key| object.get(*key).is_some_and(is_string_value))
}

fn is_string_value(raw: &Value) -> bool {
    raw.get("_type").and_then(Value::as_str) == Some("Value")
        && raw.get("dtype").and_then(Value::as_str) == Some("string")
}
