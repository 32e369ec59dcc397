//! Traversal error types.

use thiserror::Error;

/// Errors that can abort a hierarchy walk.
///
/// The walker never retries or suppresses: the first error a provider or
/// hook returns propagates unchanged to the `walk` caller, and no further
/// hooks (including `end`) are invoked.
#[derive(Debug, Error)]
pub enum VisitError {
    /// A children provider was handed a node kind it cannot enumerate.
    #[error("unsupported node: {0}")]
    UnsupportedNode(String),

    /// A children provider failed to enumerate a node's children.
    #[error("children provider failed: {0}")]
    Provider(Box<dyn std::error::Error + Send + Sync>),

    /// A visitor hook failed.
    #[error("visitor callback failed: {0}")]
    Callback(Box<dyn std::error::Error + Send + Sync>),
}

impl VisitError {
    /// Creates an unsupported-node error.
    pub fn unsupported_node(message: impl Into<String>) -> Self {
        Self::UnsupportedNode(message.into())
    }

    /// Creates a provider error from any error value.
    pub fn provider(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Provider(source.into())
    }

    /// Creates a callback error from any error value.
    pub fn callback(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Callback(source.into())
    }
}
