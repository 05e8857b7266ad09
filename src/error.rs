//! Error types for dappnode
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using DappError
pub type Result<T> = std::result::Result<T, DappError>;

/// Unified error type for dappnode operations
#[derive(Debug, Error)]
pub enum DappError {
    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Hex decode error: {0}")]
    Decode(#[from] hex::FromHexError),

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    // -------------------------------------------------------------------------
    // Application Errors
    // -------------------------------------------------------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rollup server answered {status} on /{endpoint}")]
    HttpStatus { endpoint: &'static str, status: u16 },

    #[error("Malformed response: {0}")]
    ResponseFormat(String),

    #[error("Unknown request type: {0}")]
    UnknownRequestKind(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DappError {
    /// Codec or validation failure on an input payload
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DappError::Decode(_) | DappError::Utf8(_) | DappError::Validation(_)
        )
    }

    /// Network or HTTP-layer failure talking to the rollup server
    pub fn is_transport_error(&self) -> bool {
        matches!(self, DappError::Transport(_) | DappError::HttpStatus { .. })
    }
}

impl From<reqwest::Error> for DappError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DappError::ResponseFormat(e.to_string())
        } else {
            DappError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for DappError {
    fn from(e: serde_json::Error) -> Self {
        DappError::ResponseFormat(e.to_string())
    }
}
