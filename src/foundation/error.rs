/// Convenience result type used across the crate.
pub type SpotlightResult<T> = Result<T, SpotlightError>;

/// Error taxonomy for construction-time and IO-facing APIs.
///
/// Presentation itself never fails: degenerate sequencing requests are ignored by policy.
#[derive(thiserror::Error, Debug)]
pub enum SpotlightError {
    /// Invalid user-provided target, effect or tour data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid timeline parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// Drawing surface creation or readback failures.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing tour files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpotlightError {
    /// Build a [`SpotlightError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpotlightError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`SpotlightError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SpotlightError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SpotlightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
