#![no_main]

//! Fuzz target for frame number to timecode conversion.
//!
//! Tests that conversion never panics and that accepted inputs honor the
//! field ranges and the 24-hour rollover.

use arbitrary::Arbitrary;
use framecode::{convert, frame_to_timecode, DropFrameParams};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ConvertInput {
    frame_number: i64,
    framerate: f64,
}

fuzz_target!(|input: ConvertInput| {
    let params = match DropFrameParams::for_framerate(input.framerate) {
        Ok(params) => params,
        Err(_) => {
            // Rejected rates must be rejected by the converter too
            assert!(convert(input.frame_number, input.framerate).is_err());
            return;
        }
    };

    let tc = frame_to_timecode(input.frame_number, input.framerate)
        .expect("accepted frame rate failed to convert");
    assert!(i64::from(tc.frames) < params.nominal_fps);
    assert!(tc.seconds < 60);
    assert!(tc.minutes < 60);

    // Shifting by one day must not change the result
    if let Some(shifted) = input.frame_number.checked_add(params.frames_per_24_hours) {
        let again = frame_to_timecode(shifted, input.framerate)
            .expect("accepted frame rate failed to convert");
        assert_eq!(tc, again);
    }
});
