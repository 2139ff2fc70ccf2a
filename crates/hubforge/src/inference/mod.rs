//! Inference passes deriving fields, questions, metadata and task presets
//! from features.

mod fields;
mod metadata;
mod preset;
mod questions;

pub use fields::{FieldInference, FieldKind};
pub use metadata::infer_metadata;
pub use preset::{detect_preset, TaskPreset};
pub use questions::QuestionInference;
