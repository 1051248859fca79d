//! Top-level entry point.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use shape2schema_core::FieldDescriptor;
use shape2schema_document::{ConvertOptions, SchemaDefinition, convert_object_with_options};
use tracing::{debug, warn};

use crate::{backend::SchemaBackend, error::CreateSchemaError};

/// Outcome of [`create_schema`].
pub enum Created<B: SchemaBackend> {
    /// No registration was requested; the converted definition itself.
    Bare(SchemaDefinition),
    /// The definition was handed to the backend and registered as a model.
    Registered { model: B::Model, schema: B::Schema },
}

impl<B: SchemaBackend> Created<B> {
    pub fn definition(&self) -> Option<&SchemaDefinition> {
        match self {
            Created::Bare(def) => Some(def),
            Created::Registered { .. } => None,
        }
    }

    pub fn model(&self) -> Option<&B::Model> {
        match self {
            Created::Bare(_) => None,
            Created::Registered { model, .. } => Some(model),
        }
    }
}

impl<B> Debug for Created<B>
where
    B: SchemaBackend,
    B::Model: Debug,
    B::Schema: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Created::Bare(def) => f.debug_tuple("Bare").field(def).finish(),
            Created::Registered { model, schema } => f
                .debug_struct("Registered")
                .field("model", model)
                .field("schema", schema)
                .finish(),
        }
    }
}

/// Convert `descriptor` and, when both `model_name` and `backend` are given,
/// construct and register it on the backend.
///
/// Without registration the bare [`SchemaDefinition`] is returned. Callers
/// passing no backend name the backend type explicitly, e.g.
/// `create_schema::<MemoryBackend>(&desc, None, None)`.
///
/// # Errors
///
/// Returns [`CreateSchemaError::Convert`] if the descriptor has an
/// unsupported kind (the backend is not called), or
/// [`CreateSchemaError::Backend`] if the backend rejects the schema or model.
pub fn create_schema<B: SchemaBackend>(
    descriptor: &FieldDescriptor,
    model_name: Option<&str>,
    backend: Option<&B>,
) -> Result<Created<B>, CreateSchemaError<B::Error>> {
    create_schema_with_options(descriptor, model_name, backend, ConvertOptions::default())
}

/// [`create_schema`] with explicit [`ConvertOptions`].
pub fn create_schema_with_options<B: SchemaBackend>(
    descriptor: &FieldDescriptor,
    model_name: Option<&str>,
    backend: Option<&B>,
    options: ConvertOptions,
) -> Result<Created<B>, CreateSchemaError<B::Error>> {
    let definition = convert_object_with_options(descriptor, options)?;

    let (name, backend) = match (model_name, backend) {
        (Some(name), Some(backend)) => (name, backend),
        (None, None) => return Ok(Created::Bare(definition)),
        (name, _) => {
            warn!(
                model = name,
                "model name and backend must be given together; skipping registration"
            );
            return Ok(Created::Bare(definition));
        }
    };

    debug!(model = name, fields = definition.len(), "registering model");
    let backend_error = |source: B::Error| CreateSchemaError::Backend {
        model: name.to_string(),
        source,
    };
    let schema = backend.construct_schema(&definition).map_err(backend_error)?;
    let model = backend.register_model(name, &schema).map_err(backend_error)?;

    Ok(Created::Registered { model, schema })
}
