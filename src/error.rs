//! Public error taxonomy for the SDK.
//!
//! Every load/show failure surfaces through one of these variants via the
//! event callbacks; nothing is panicked across the public boundary.

use thiserror::Error;

/// Stable numeric error codes for hosts that key analytics off integers.
pub mod code {
    pub const NO_FILL: i32 = 0;
    pub const NETWORK_ERROR: i32 = 1;
    pub const TIMEOUT: i32 = 2;
    pub const INVALID_REQUEST: i32 = 3;
    pub const INTERNAL_ERROR: i32 = 4;
    pub const SDK_NOT_INITIALIZED: i32 = 5;
    pub const UNKNOWN: i32 = 99;
}

/// Errors reported by the ad loading and showing pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdError {
    /// The exchange answered but had no usable bid. Expected outcome, not a
    /// fault.
    #[error("no fill: {0}")]
    NoFill(String),

    /// Network-layer failure (DNS, connect, reset, non-2xx status).
    #[error("network error: {0}")]
    Network(String),

    /// The bid request exceeded the transport timeout.
    #[error("request timeout")]
    Timeout,

    /// Bad caller input, an unusable device profile, or an attempt to show an
    /// ad that is not loaded or has expired.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Parse or render failure, or any unexpected condition.
    #[error("internal error: {0}")]
    Internal(String),

    /// The SDK configuration is missing its exchange credentials.
    #[error("SDK not initialized")]
    SdkNotInitialized,
}

impl AdError {
    pub fn code(&self) -> i32 {
        match self {
            AdError::NoFill(_) => code::NO_FILL,
            AdError::Network(_) => code::NETWORK_ERROR,
            AdError::Timeout => code::TIMEOUT,
            AdError::InvalidRequest(_) => code::INVALID_REQUEST,
            AdError::Internal(_) => code::INTERNAL_ERROR,
            AdError::SdkNotInitialized => code::SDK_NOT_INITIALIZED,
        }
    }
}
