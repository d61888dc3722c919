//! services/api/src/error.rs
//!
//! Failures that end the server or a client connection. Rejected user actions
//! are not errors at this level; they travel to the client as `rejected`.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Startup configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The socket refused a frame; the client is gone.
    #[error("WebSocket Error: {0}")]
    Websocket(#[from] axum::Error),

    /// A server message could not be encoded as JSON.
    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Binding or serving the listener failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
