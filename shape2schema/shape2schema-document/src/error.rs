//! Error types for descriptor conversion.

/// Error returned by the converter. Conversion aborts on the first error;
/// no partial definition is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// A field's core descriptor has no document-schema counterpart.
    #[error("unsupported type '{type_name}' for field '{path}'")]
    UnsupportedType { path: String, type_name: String },
}

impl ConvertError {
    /// Dot-joined path of the offending field.
    pub fn path(&self) -> &str {
        match self {
            ConvertError::UnsupportedType { path, .. } => path,
        }
    }
}
