/// Convenience result type used across cardsmith.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only [`CardError::SurfaceUnavailable`] is expected to escape [`crate::CardRenderer::render`];
/// the other compositing-stage variants are recovered locally and logged.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// The drawing surface cannot be created or sized.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// A background or decoration routine failed.
    #[error("compositing error: {0}")]
    Compositing(String),

    /// Text fitting or text painting failed.
    #[error("layout error: {0}")]
    Layout(String),

    /// Building a single animation frame failed.
    #[error("frame error: {0}")]
    Frame(String),

    /// The image encoder failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid user-provided configuration or request data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::SurfaceUnavailable`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Build a [`CardError::Compositing`] value.
    pub fn compositing(msg: impl Into<String>) -> Self {
        Self::Compositing(msg.into())
    }

    /// Build a [`CardError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`CardError::Frame`] value.
    pub fn frame(msg: impl Into<String>) -> Self {
        Self::Frame(msg.into())
    }

    /// Build a [`CardError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
