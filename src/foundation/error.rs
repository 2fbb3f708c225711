/// Convenience result type used across Subburn.
pub type SubburnResult<T> = Result<T, SubburnError>;

/// Top-level error taxonomy used by compiler APIs.
#[derive(thiserror::Error, Debug)]
pub enum SubburnError {
    /// Invalid user-provided style or frame data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or interpreting font configuration.
    #[error("font error: {0}")]
    Font(String),

    /// Errors while assembling or serializing a filter graph.
    #[error("graph error: {0}")]
    Graph(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SubburnError {
    /// Build a [`SubburnError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SubburnError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`SubburnError::Graph`] value.
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
