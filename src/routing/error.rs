//! Routing error definitions.

use thiserror::Error;

/// Errors raised while registering controllers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// `set_name` was called after the route table was sealed.
    #[error("Cannot rename frozen controller binding '{name}'")]
    Frozen { name: String },
}

/// Result type for binding operations.
pub type BindingResult<T> = Result<T, BindingError>;
