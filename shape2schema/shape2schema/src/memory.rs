//! In-process [`SchemaBackend`] keeping registered models in a map.

use std::{
    collections::{BTreeMap, btree_map::Entry},
    sync::{Arc, Mutex},
};

use shape2schema_document::SchemaDefinition;
use tracing::debug;

use crate::{backend::SchemaBackend, error::MemoryBackendError};

/// Model handle returned by [`MemoryBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryModel {
    pub name: String,
    pub schema: Arc<SchemaDefinition>,
}

/// Backend that registers models in memory. Model names are unique; a second
/// registration under the same name fails.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    models: Mutex<BTreeMap<String, MemoryModel>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self, name: &str) -> Option<MemoryModel> {
        self.models.lock().ok()?.get(name).cloned()
    }

    /// Registered model names in sorted order.
    pub fn model_names(&self) -> Vec<String> {
        self.models
            .lock()
            .map(|models| models.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl SchemaBackend for MemoryBackend {
    type Schema = Arc<SchemaDefinition>;
    type Model = MemoryModel;
    type Error = MemoryBackendError;

    fn construct_schema(&self, definition: &SchemaDefinition) -> Result<Self::Schema, Self::Error> {
        Ok(Arc::new(definition.clone()))
    }

    fn register_model(&self, name: &str, schema: &Self::Schema) -> Result<Self::Model, Self::Error> {
        let mut models = self.models.lock().map_err(|_| MemoryBackendError::Poisoned)?;
        match models.entry(name.to_string()) {
            Entry::Occupied(_) => Err(MemoryBackendError::ModelOverwrite {
                name: name.to_string(),
            }),
            Entry::Vacant(slot) => {
                let model = MemoryModel {
                    name: name.to_string(),
                    schema: Arc::clone(schema),
                };
                slot.insert(model.clone());
                debug!(model = name, total = models.len(), "model registered");
                Ok(model)
            }
        }
    }
}
