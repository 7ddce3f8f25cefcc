use thiserror::Error;

/// Failures the product backend can hand back.
///
/// Display strings are the backend's user-facing messages; the store
/// surfaces them verbatim. `Disconnected` is the one condition with no
/// backend-provided message (the channel to the service actor is gone), and
/// the store substitutes a per-operation fallback for it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("Product name is required")]
    NameRequired,
    #[error("Product with id {0} not found")]
    NotFound(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {0}")]
    Server(String),
    #[error("product service unavailable")]
    Disconnected,
}
