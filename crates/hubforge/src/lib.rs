//! hubforge: annotation-task schema inference for datasets.
//!
//! hubforge takes the loosely-typed feature description of a dataset
//! (as published by the Hugging Face dataset viewer) and derives which
//! columns become annotatable fields, which become label questions and
//! which become numeric metadata, for one or many dataset subsets.
//!
//! # Core Rules
//!
//! - **Always annotatable**: every subset has at least one field and one question
//! - **Order preserving**: derived collections follow column order
//! - **Silent exclusion**: unrecognized columns are skipped, not reported
//!
//! # Example
//!
//! ```
//! use hubforge::DatasetCreationBuilder;
//!
//! let raw = serde_json::json!({
//!     "features": {
//!         "text": {"dtype": "string", "_type": "Value"},
//!         "label": {"dtype": "int64", "_type": "ClassLabel", "names": ["neg", "pos"]}
//!     }
//! });
//!
//! let model = DatasetCreationBuilder::new(raw).build().unwrap();
//! assert_eq!(model.subsets(), vec!["default"]);
//! assert_eq!(model.fields()[0].name, "text");
//! assert_eq!(model.questions()[0].name, "label");
//! ```

pub mod config;
pub mod error;
pub mod feature;
pub mod inference;
pub mod schema;

mod dataset;
mod subset;

pub use config::InferenceConfig;
pub use dataset::{DatasetCreationBuilder, DatasetCreationModel, SubsetMode};
pub use error::{HubforgeError, Result};
pub use feature::{FeatureDescriptor, FeatureKind, PrimitiveType};
pub use inference::TaskPreset;
pub use schema::{
    Field, FieldInputType, MetadataProperty, MetadataType, Question, QuestionKind,
};
pub use subset::Subset;
