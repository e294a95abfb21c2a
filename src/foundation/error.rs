/// Convenience result type used across the crate.
pub type SchemeResult<T> = Result<T, SchemeError>;

/// Error taxonomy for everything outside the transition engine.
///
/// The engine itself never fails; these errors come from loading, saving, validating and
/// building actions at the boundary.
#[derive(thiserror::Error, Debug)]
pub enum SchemeError {
    /// Scheme document or action payload violates a schema invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing a scheme document.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem errors while reading or writing a scheme.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SchemeError {
    /// Build a [`SchemeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SchemeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
