//! CLI command implementations.

pub mod infer;
pub mod subsets;

use std::path::Path;

use hubforge::{DatasetCreationBuilder, DatasetCreationModel, InferenceConfig};

/// Read a descriptor file and build its dataset model.
pub fn load_model(
    path: &Path,
    config: InferenceConfig,
) -> Result<DatasetCreationModel, Box<dyn std::error::Error>> {
    let model = DatasetCreationBuilder::from_path(path)?
        .with_config(config)
        .build()?;
    Ok(model)
}
