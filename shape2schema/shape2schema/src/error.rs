//! Error types for schema creation.

use shape2schema_document::ConvertError;

/// Errors produced by [`create_schema`](crate::create_schema).
#[derive(Debug, thiserror::Error)]
pub enum CreateSchemaError<E>
where
    E: std::error::Error + 'static,
{
    /// The descriptor could not be converted; nothing was sent to the backend.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// The backend rejected schema construction or model registration.
    #[error("backend failed to register model '{model}': {source}")]
    Backend {
        model: String,
        #[source]
        source: E,
    },
}

/// Errors produced by [`MemoryBackend`](crate::MemoryBackend).
#[derive(Debug, thiserror::Error)]
pub enum MemoryBackendError {
    /// A model is already registered under this name.
    #[error("cannot overwrite model '{name}' once registered")]
    ModelOverwrite { name: String },

    /// The registry lock was poisoned by a panicking writer.
    #[error("model registry is poisoned")]
    Poisoned,
}
