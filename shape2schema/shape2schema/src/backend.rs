//! Contract for the document-store collaborator that receives converted
//! definitions.

use shape2schema_document::SchemaDefinition;

/// Schema construction and model registration on a document-store
/// connection.
///
/// Implementations own whatever I/O registration involves; conversion itself
/// never touches the backend until it has fully succeeded.
pub trait SchemaBackend {
    /// Handle returned by schema construction.
    type Schema;
    /// Handle returned by model registration.
    type Model;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build a backend schema from a converted definition.
    fn construct_schema(&self, definition: &SchemaDefinition) -> Result<Self::Schema, Self::Error>;

    /// Register `schema` under `name` and return the resulting model.
    fn register_model(&self, name: &str, schema: &Self::Schema) -> Result<Self::Model, Self::Error>;
}
