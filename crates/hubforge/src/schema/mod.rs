//! Derived annotation-task schema records.

mod field;
mod metadata;
mod question;

pub use field::{Field, FieldInputType};
pub use metadata::{MetadataProperty, MetadataType};
pub use question::{Question, QuestionKind};
