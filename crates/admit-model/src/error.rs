use thiserror::Error;

/// Errors raised while building a [`ReferenceCatalog`](crate::ReferenceCatalog).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A canonical program name has no entry in the program-type mapping.
    #[error("program `{program}` has no type in the program-type mapping")]
    UntypedProgram { program: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
