/// Convenience result type used across the face engine.
pub type FaceResult<T> = Result<T, FaceError>;

/// Top-level error taxonomy used by face APIs.
///
/// Catalog and preset lookups are total and never produce an error; only caller input
/// (durations, names, config files) can fail.
#[derive(thiserror::Error, Debug)]
pub enum FaceError {
    /// Invalid caller-provided value (duration, shape or mood name).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid face configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FaceError {
    /// Build a [`FaceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FaceError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FaceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
