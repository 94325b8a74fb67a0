//! SMPTE timecode (HH:MM:SS:FF) from linear frame numbers.
//!
//! The conversion wraps the frame number into a 24-hour range, re-inserts the
//! labels skipped by drop-frame counting, then splits the label count into
//! hours, minutes, seconds and frames at the nominal (rounded) frame rate.

use crate::dropframe::DropFrameParams;
use crate::error::{Result, TimecodeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A timecode produced from a frame number.
///
/// Field order matters: the derived ordering compares hours first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timecode {
    /// Hours.
    pub hours: u32,
    /// Minutes (0-59).
    pub minutes: u32,
    /// Seconds (0-59).
    pub seconds: u32,
    /// Frames (0 to nominal fps - 1).
    pub frames: u32,
}

impl Timecode {
    /// Create a timecode from its components. No range checks are applied.
    #[must_use]
    pub const fn new(hours: u32, minutes: u32, seconds: u32, frames: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Split a drop-compensated label count into components.
    fn from_labels(labels: i128, nominal_fps: i64) -> Result<Self> {
        let fps = i128::from(nominal_fps);
        let total_seconds = labels / fps;
        let component = |value: i128| u32::try_from(value).map_err(|_| TimecodeError::Overflow);

        Ok(Self {
            hours: component(total_seconds / 3600)?,
            minutes: component((total_seconds / 60) % 60)?,
            seconds: component(total_seconds % 60)?,
            frames: component(labels % fps)?,
        })
    }

    /// Check the components against a broadcast clock at `nominal_fps`.
    ///
    /// Timecodes near the end of the day can come out of the converter with
    /// `hours == 24`, which this rejects.
    #[must_use]
    pub fn is_valid(&self, nominal_fps: u32) -> bool {
        self.hours < 24 && self.minutes < 60 && self.seconds < 60 && self.frames < nominal_fps
    }

    /// Check if timecode is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.frames == 0
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

/// Convert a frame number to timecode components.
///
/// Negative frame numbers count backward from the 24-hour rollover point, and
/// frame numbers past it wrap around.
///
/// # Errors
/// Returns [`TimecodeError::InvalidFrameRate`] for rates that are not finite,
/// not positive, or that round to a zero nominal rate.
///
/// # Example
/// ```rust
/// use framecode::frame_to_timecode;
///
/// let tc = frame_to_timecode(1800, 29.97).unwrap();
/// assert_eq!((tc.minutes, tc.seconds, tc.frames), (1, 0, 2));
/// ```
pub fn frame_to_timecode(frame_number: i64, framerate: f64) -> Result<Timecode> {
    let params = DropFrameParams::for_framerate(framerate)?;
    let normalized = params.normalize(frame_number);
    let labels = params.compensate(normalized);
    let tc = Timecode::from_labels(labels, params.nominal_fps)?;

    debug!(frame_number, normalized, %labels, timecode = %tc, "converted frame number");
    Ok(tc)
}

/// Convert a frame number to an `HH:MM:SS:FF` string.
///
/// # Example
/// ```rust
/// use framecode::convert;
///
/// assert_eq!(convert(0, 29.97).unwrap(), "00:00:00:00");
/// assert_eq!(convert(-1, 25.0).unwrap(), "24:01:43:18");
/// assert!(convert(100, 0.0).is_err());
/// ```
pub fn convert(frame_number: i64, framerate: f64) -> Result<String> {
    frame_to_timecode(frame_number, framerate).map(|tc| tc.to_string())
}
