/// Convenience result type used across pagewipe.
pub type PagewipeResult<T> = Result<T, PagewipeError>;

/// Error taxonomy for construction-time failures.
///
/// Resolution and the running transition state machine never fail; only building a route
/// table, a configuration, or feeding malformed values to a surface can.
#[derive(thiserror::Error, Debug)]
pub enum PagewipeError {
    /// Invalid user-provided route, configuration, or surface data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or sampling animation timelines.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PagewipeError {
    /// Build a [`PagewipeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PagewipeError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }
}

impl From<serde_json::Error> for PagewipeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
