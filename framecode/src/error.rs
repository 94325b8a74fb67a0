//! Error types for timecode conversion.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur while converting a frame number to timecode.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum TimecodeError {
    /// The frame rate cannot drive the conversion.
    #[error("Invalid frame rate: {framerate} ({reason})")]
    InvalidFrameRate {
        /// The frame rate that was rejected.
        framerate: f64,
        /// Why it was rejected.
        reason: String,
    },

    /// A derived frame count does not fit in a 64-bit frame number.
    #[error("Timecode overflow")]
    Overflow,
}

impl TimecodeError {
    /// Create an invalid frame rate error.
    pub fn invalid_frame_rate(framerate: f64, reason: impl Into<String>) -> Self {
        Self::InvalidFrameRate {
            framerate,
            reason: reason.into(),
        }
    }

    /// Short machine-readable tag for this error.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFrameRate { .. } => "invalid_frame_rate",
            Self::Overflow => "overflow",
        }
    }
}
