//! Error Types
//!
//! This module defines the error types used throughout Strata.
//!
//! # Overview
//!
//! The main error type [`StrataError`] covers:
//! - invalid construction arguments (missing values, missing clone strategies)
//! - malformed packet data handed to the interval decoder
//! - configuration parsing failures
//!
//! A property that simply has no value at a given time is **not** an error;
//! that outcome is represented as `None`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strata_core::errors::{StrataError, Result};
//!
//! fn build() -> Result<()> {
//!     Err(StrataError::InvalidArgument("value is required.".into()))
//! }
//! ```

use thiserror::Error;

/// The main error type for Strata.
#[derive(Error, Debug)]
pub enum StrataError {
    // ========================================================================
    // Construction Errors
    // ========================================================================
    /// An argument failed validation (missing value, missing clone strategy,
    /// out-of-range number).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ========================================================================
    // Packet & Format Errors
    // ========================================================================
    /// Raw packet data for a named property could not be decoded.
    #[error("Invalid packet for `{property}`: {reason}")]
    InvalidPacket {
        /// Slot name the packet was addressed to
        property: String,
        /// What was wrong with it
        reason: String,
    },

    /// A material type tag that no factory knows about.
    #[error("Unknown material type: {0}")]
    UnknownMaterialType(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl StrataError {
    /// Shorthand for [`StrataError::InvalidPacket`].
    pub fn invalid_packet(property: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPacket {
            property: property.into(),
            reason: reason.into(),
        }
    }
}

/// Alias for `Result<T, StrataError>`.
pub type Result<T> = std::result::Result<T, StrataError>;
