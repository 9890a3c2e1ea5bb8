//! Error types shared by the pagination and calendar cores.

/// Errors raised when a core function receives arguments outside its domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// An argument was outside the range the function accepts
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl WidgetError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;
