//! Metadata inference: numeric columns become metadata properties.

use crate::feature::FeatureDescriptor;
use crate::schema::{MetadataProperty, MetadataType};

/// Derive metadata properties from numeric primitive types.
///
/// Only the primitive type is inspected, so a `ClassLabel` stored as
/// `int64` also yields a property. An empty result is valid.
pub fn infer_metadata(features: &[FeatureDescriptor]) -> Vec<MetadataProperty> {
    features
        .iter()
        .filter_map(|feature| {
            let metadata_type = feature
                .primitive_type
                .as_ref()
                .and_then(MetadataType::from_primitive)?;
            Some(MetadataProperty::new(feature.name.clone(), metadata_type))
        })
        .collect()
}
