/// Convenience result type used across iconforge.
pub type IconforgeResult<T> = Result<T, IconforgeError>;

/// Top-level error taxonomy used by pipeline and encoder APIs.
#[derive(thiserror::Error, Debug)]
pub enum IconforgeError {
    /// Invalid user-provided job data (zero/duplicate sizes, targets above
    /// the master resolution, bad supersample factor).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding or compositing raster data.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while producing an image payload or container byte stream.
    #[error("encode error: {0}")]
    Encode(String),

    /// Internal offset/length mismatch detected during container assembly.
    #[error("container invariant violation: {0}")]
    Invariant(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconforgeError {
    /// Build an [`IconforgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`IconforgeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`IconforgeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`IconforgeError::Invariant`] value.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
