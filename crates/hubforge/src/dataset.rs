//! Dataset creation model and the builder that detects its subsets.

use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde_json::Value;

use crate::config::InferenceConfig;
use crate::error::{HubforgeError, Result};
use crate::inference::TaskPreset;
use crate::schema::{Field, MetadataProperty, Question};
use crate::subset::Subset;

/// How the raw descriptor is partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsetMode {
    /// Top level holds the sentinel key plus one descriptor per subset.
    Multi,
    /// Top level is itself a single subset descriptor.
    Single,
}

/// All subsets of a dataset plus the currently selected one.
#[derive(Debug, Clone)]
pub struct DatasetCreationModel {
    subsets: IndexMap<String, Subset>,
    selected: usize,
}

impl DatasetCreationModel {
    /// Create a model selecting the first subset.
    ///
    /// Fails when `subsets` is empty, since there would be nothing to
    /// select, or when two subsets share a name.
    pub fn new(subsets: Vec<Subset>) -> Result<Self> {
        if subsets.is_empty() {
            return Err(HubforgeError::EmptyDataset(
                "descriptor defines no subsets".to_string(),
            ));
        }

        let mut by_name = IndexMap::with_capacity(subsets.len());
        for subset in subsets {
            match by_name.entry(subset.name().to_string()) {
                Entry::Occupied(entry) => {
                    return Err(HubforgeError::DuplicateSubset(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(subset);
                }
            }
        }

        Ok(Self {
            subsets: by_name,
            selected: 0,
        })
    }

    /// Subset names in input order.
    pub fn subsets(&self) -> Vec<&str> {
        self.subsets.keys().map(String::as_str).collect()
    }

    pub fn has_more_than_one_subset(&self) -> bool {
        self.subsets.len() > 1
    }

    /// Look up a subset by name.
    pub fn subset(&self, name: &str) -> Option<&Subset> {
        self.subsets.get(name)
    }

    /// Select the subset with the given name.
    ///
    /// An unknown name is rejected and the current selection is kept.
    pub fn change_subset(&mut self, name: &str) -> Result<()> {
        match self.subsets.get_index_of(name) {
            Some(index) => {
                tracing::debug!(subset = name, "changed subset");
                self.selected = index;
                Ok(())
            }
            None => Err(HubforgeError::UnknownSubset {
                name: name.to_string(),
                available: self.subsets.keys().cloned().collect(),
            }),
        }
    }

    pub fn selected_subset(&self) -> &Subset {
        // `selected` is only ever set from a valid index of a non-empty map.
        &self.subsets[self.selected]
    }

    pub fn selected_subset_name(&self) -> &str {
        self.selected_subset().name()
    }

    /// Fields of the selected subset.
    pub fn fields(&self) -> &[Field] {
        self.selected_subset().fields()
    }

    /// Questions of the selected subset.
    pub fn questions(&self) -> &[Question] {
        self.selected_subset().questions()
    }

    /// Metadata properties of the selected subset.
    pub fn metadata(&self) -> &[MetadataProperty] {
        self.selected_subset().metadata()
    }

    /// Task preset of the selected subset.
    pub fn preset(&self) -> Option<TaskPreset> {
        self.selected_subset().preset()
    }

    /// Iterate over all subsets in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Subset> {
        self.subsets.values()
    }
}

/// Entry point turning a raw dataset descriptor into a model.
#[derive(Debug, Clone)]
pub struct DatasetCreationBuilder {
    raw: Value,
    config: InferenceConfig,
}

impl DatasetCreationBuilder {
    pub fn new(raw: Value) -> Self {
        Self {
            raw,
            config: InferenceConfig::default(),
        }
    }

    /// Parse the raw descriptor from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Read and parse the raw descriptor from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| HubforgeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "loaded descriptor");
        Self::from_json_str(&contents)
    }

    pub fn with_config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }

    /// Detect whether the descriptor holds one subset or many.
    pub fn mode(&self) -> SubsetMode {
        match self.raw.as_object() {
            Some(object) if object.contains_key(&self.config.subset_sentinel) => SubsetMode::Multi,
            _ => SubsetMode::Single,
        }
    }

    /// Build every subset and assemble the model.
    pub fn build(&self) -> Result<DatasetCreationModel> {
        let sentinel = self.config.subset_sentinel.as_str();
        let object = self.raw.as_object().ok_or_else(|| {
            HubforgeError::structural(sentinel, "dataset descriptor is not a JSON object")
        })?;

        let mode = self.mode();
        tracing::debug!(?mode, "detected subset mode");

        let subsets = match mode {
            SubsetMode::Multi => object
                .iter()
                .filter(|(name, _)| name.as_str() != sentinel)
                .map(|(name, descriptor)| Subset::with_config(name.as_str(), descriptor, &self.config))
                .collect::<Result<Vec<_>>>()?,
            SubsetMode::Single => vec![Subset::with_config(sentinel, &self.raw, &self.config)?],
        };

        DatasetCreationModel::new(subsets)
    }
}
