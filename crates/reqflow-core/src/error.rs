//! Error types for reqflow-core.
//!
//! Only structural problems with a line surface as [`ParseError`]. Malformed
//! header JSON and non-numeric fields are absorbed by the [`Row`](crate::Row)
//! getters and never reach the caller.

/// Why a raw line could not be turned into a [`Row`](crate::Row).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line contains no `REQ` marker.
    #[error("invalid reqlog: no REQ marker")]
    MarkerNotFound,
    /// Splitting on tabs produced neither 12 nor 14 fields.
    #[error("invalid field count: {0} (expected 12 or 14)")]
    FieldCountMismatch(usize),
    /// The first field is not exactly `REQ`, e.g. `REQUEST`.
    #[error("invalid head: {0:?}")]
    HeaderMismatch(String),
}

/// Failure to construct a parser from configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown parser type {0:?}")]
    UnknownType(String),
}
