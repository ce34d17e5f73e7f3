//! # Error Types
//!
//! Failures at the wire codec seam. The envelope itself has no failure
//! modes: once constructed it is always in a valid state, and malformed
//! input is rejected here before an envelope ever exists.

use thiserror::Error;

/// Errors produced while decoding or encoding a request payload.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Payload is not valid JSON, or the `attributes` field has the wrong
    /// shape (e.g. a string where an array is expected).
    #[error("malformed request payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Payload exceeds the size gate and was rejected before parsing.
    #[error("request payload of {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },
}
