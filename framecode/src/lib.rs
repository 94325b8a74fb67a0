//! Frame number to SMPTE timecode conversion.
//!
//! This crate turns a linear frame count and a frame rate into a broadcast
//! timecode string (`HH:MM:SS:FF`), applying drop-frame compensation derived
//! from the frame rate:
//!
//! - **Rollover**: frame numbers wrap every 24 hours' worth of frames
//! - **Negative frames**: count backward from the rollover point
//! - **Drop-frame**: labels skipped at minute starts are re-inserted before the
//!   frame count is split into fields
//!
//! # Quick Start
//!
//! ```rust
//! use framecode::{convert, frame_to_timecode};
//!
//! assert_eq!(convert(1800, 29.97).unwrap(), "00:01:00:02");
//!
//! let tc = frame_to_timecode(30, 29.97).unwrap();
//! assert_eq!(tc.seconds, 1);
//! assert_eq!(tc.to_string(), "00:00:01:00");
//! ```
//!
//! # Drop-Frame Parameters
//!
//! The frame counts behind a conversion can be inspected directly:
//!
//! ```rust
//! use framecode::DropFrameParams;
//!
//! let params = DropFrameParams::for_framerate(59.94).unwrap();
//! assert_eq!(params.drop_frames, 4);
//! assert_eq!(params.nominal_fps, 60);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod dropframe;
pub mod error;
pub mod smpte;

// Re-export main types
pub use dropframe::{is_standard_drop_rate, DropFrameParams};
pub use error::{Result, TimecodeError};
pub use smpte::{convert, frame_to_timecode, Timecode};
