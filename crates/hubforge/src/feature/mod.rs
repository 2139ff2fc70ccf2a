//! Feature descriptors and raw-input normalization.

mod normalize;
mod types;

pub use normalize::{is_chat_shape, normalize_feature, normalize_features};
pub use types::{FeatureDescriptor, FeatureKind, PrimitiveType};
