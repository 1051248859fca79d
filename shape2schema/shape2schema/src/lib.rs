//! Type-shape descriptor to document-schema conversion.
//!
//! [`create_schema`] converts an object descriptor and, when a model name and
//! a [`SchemaBackend`] are both given, hands the result to the backend for
//! schema construction and model registration.
//!
//! ```rust
//! use shape2schema::{Created, MemoryBackend, create_schema};
//! use shape2schema::core::FieldDescriptor;
//!
//! let user = FieldDescriptor::object([("name", FieldDescriptor::string())]);
//! let backend = MemoryBackend::new();
//!
//! let created = create_schema(&user, Some("User"), Some(&backend))?;
//! assert!(matches!(created, Created::Registered { .. }));
//! assert!(backend.model("User").is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod backend;
mod create;
mod error;
mod memory;

pub use backend::SchemaBackend;
pub use create::{Created, create_schema, create_schema_with_options};
pub use error::{CreateSchemaError, MemoryBackendError};
pub use memory::{MemoryBackend, MemoryModel};
pub use shape2schema_core as core;
pub use shape2schema_document as document;
