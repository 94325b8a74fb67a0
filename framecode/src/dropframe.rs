//! Drop-frame parameters derived from a frame rate.
//!
//! Drop-frame timecode compensates for the difference between 30fps and 29.97fps
//! (or 60fps and 59.94fps) by skipping frame labels at the start of every minute
//! except each tenth one.
//!
//! The parameters here are computed from the frame rate alone, with no lookup
//! table. Every rate, including integral ones like 30 or 24, yields a non-zero
//! drop count once `rate * 0.066666` rounds above zero, and the compensation is
//! applied regardless. Use [`is_standard_drop_rate`] to tell whether a rate is
//! one of the NTSC rates the drop-frame convention was designed for.

use crate::error::{Result, TimecodeError};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Factor applied to the frame rate to get the frame labels dropped per minute.
pub const DROP_FACTOR: f64 = 0.066666;

/// Tolerance when matching a rate against the NTSC drop-frame rates.
const STANDARD_RATE_TOLERANCE: f64 = 0.01;

/// The NTSC rates drop-frame timecode is defined for (30000/1001, 60000/1001).
const STANDARD_DROP_RATES: [f64; 2] = [30000.0 / 1001.0, 60000.0 / 1001.0];

/// Frame counts derived from a frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropFrameParams {
    /// Frame labels skipped at the start of each dropped minute.
    pub drop_frames: i64,
    /// Frames in one hour.
    pub frames_per_hour: i64,
    /// Frames in 24 hours; the rollover point.
    pub frames_per_24_hours: i64,
    /// Frames in ten minutes.
    pub frames_per_10_minutes: i64,
    /// Frames in a minute, less the dropped labels.
    pub frames_per_minute: i64,
    /// Integral frame rate used for the frames field.
    pub nominal_fps: i64,
}

impl DropFrameParams {
    /// Derive the parameters for a frame rate.
    ///
    /// Rejects rates that are not finite, not positive, or whose nominal rate
    /// rounds to zero. Rates so large that a day of frames overflows an `i64`
    /// produce [`TimecodeError::Overflow`].
    pub fn for_framerate(framerate: f64) -> Result<Self> {
        if !framerate.is_finite() {
            return Err(TimecodeError::invalid_frame_rate(framerate, "must be finite"));
        }
        if framerate <= 0.0 {
            return Err(TimecodeError::invalid_frame_rate(
                framerate,
                "must be greater than zero",
            ));
        }

        let nominal_fps = round_to_frames(framerate)?;
        if nominal_fps == 0 {
            return Err(TimecodeError::invalid_frame_rate(
                framerate,
                "nominal rate rounds to zero",
            ));
        }

        let drop_frames = round_to_frames(framerate * DROP_FACTOR)?;
        let frames_per_hour = round_to_frames(framerate * 3600.0)?;
        let frames_per_24_hours = frames_per_hour
            .checked_mul(24)
            .ok_or(TimecodeError::Overflow)?;
        let frames_per_10_minutes = round_to_frames(framerate * 600.0)?;
        let frames_per_minute = round_to_frames(framerate * 60.0)? - drop_frames;

        let params = Self {
            drop_frames,
            frames_per_hour,
            frames_per_24_hours,
            frames_per_10_minutes,
            frames_per_minute,
            nominal_fps,
        };
        trace!(framerate, ?params, "derived drop-frame parameters");
        Ok(params)
    }

    /// Wrap a frame number into `[0, frames_per_24_hours)`.
    ///
    /// Negative frame numbers count backward from the rollover point.
    #[must_use]
    pub fn normalize(&self, frame_number: i64) -> i64 {
        frame_number.rem_euclid(self.frames_per_24_hours)
    }

    /// Re-insert the frame labels skipped by drop-frame counting.
    ///
    /// `frame_number` must already be normalized. The result is the label
    /// count that the timecode fields are extracted from.
    #[must_use]
    pub fn compensate(&self, frame_number: i64) -> i128 {
        let frame = i128::from(frame_number);
        let drop = i128::from(self.drop_frames);
        let ten_minutes = frame / i128::from(self.frames_per_10_minutes);
        let remainder = frame % i128::from(self.frames_per_10_minutes);

        if remainder > drop {
            let minutes = (remainder - drop) / i128::from(self.frames_per_minute);
            frame + drop * 9 * ten_minutes + drop * minutes
        } else {
            frame + drop * ten_minutes
        }
    }
}

/// Check whether a rate is one of the NTSC drop-frame rates (29.97 or 59.94).
#[must_use]
pub fn is_standard_drop_rate(framerate: f64) -> bool {
    STANDARD_DROP_RATES
        .iter()
        .any(|rate| (framerate - rate).abs() < STANDARD_RATE_TOLERANCE)
}

/// Round half to even and convert to a frame count.
fn round_to_frames(value: f64) -> Result<i64> {
    let rounded = value.round_ties_even();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if rounded >= i64::MAX as f64 {
        return Err(TimecodeError::Overflow);
    }
    Ok(rounded as i64)
}
