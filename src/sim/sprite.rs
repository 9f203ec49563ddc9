//! Angle quantization for sprite-sheet frame selection
//!
//! Sprite sheets carry a fixed number of pre-rotated frames, so a continuous
//! angle has to snap to the nearest one. The same quantization runs in
//! reverse when firing: a shot must fly along the heading the snapped ship
//! sprite *shows*, not the continuous angle the ship actually holds.

use std::f32::consts::TAU;

/// Frame index for `angle` in a sheet of `num_frames` rotation frames.
///
/// Rounds to the nearest frame rather than truncating; truncation biases the
/// displayed rotation half a frame counterclockwise. `alt_offset` shifts the
/// index into a sheet sub-range (e.g. the thrust-flame ship variants) so one
/// lookup serves every variant.
///
/// Total over all of f32: negative angles and angles past a full turn land
/// in range via euclidean remainder.
#[inline]
pub fn frame_index(angle: f32, num_frames: u32, alt_offset: u32) -> u32 {
    let step = 360.0 / num_frames as f32;
    let nearest = (angle.to_degrees() / step).round() as i64;
    nearest.rem_euclid(num_frames as i64) as u32 + alt_offset * num_frames
}

/// The heading a sprite frame actually displays: the frame index mapped back
/// to radians. Shots fired along this match where the ship appears to point.
#[inline]
pub fn quantized_angle(angle: f32, num_frames: u32) -> f32 {
    frame_index(angle, num_frames, 0) as f32 * (TAU / num_frames as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_frame_index_basic() {
        // 36 frames = 10 degrees per frame
        assert_eq!(frame_index(0.0, 36, 0), 0);
        assert_eq!(frame_index(10.0_f32.to_radians(), 36, 0), 1);
        assert_eq!(frame_index(180.0_f32.to_radians(), 36, 0), 18);
    }

    #[test]
    fn test_frame_index_wraps_past_full_turn() {
        // 370 degrees -> round(37) mod 36 = 1
        assert_eq!(frame_index(370.0_f32.to_radians(), 36, 0), 1);
    }

    #[test]
    fn test_frame_index_negative_angle() {
        // -10 degrees -> round(-1) mod 36 = 35
        assert_eq!(frame_index(-10.0_f32.to_radians(), 36, 0), 35);
    }

    #[test]
    fn test_frame_index_rounds_not_truncates() {
        // 6 degrees is past the midpoint between frame 0 and frame 1;
        // truncation would stick at 0
        assert_eq!(frame_index(6.0_f32.to_radians(), 36, 0), 1);
        assert_eq!(frame_index(4.0_f32.to_radians(), 36, 0), 0);
    }

    #[test]
    fn test_alt_offset_shifts_sheet_segment() {
        assert_eq!(frame_index(0.0, 36, 1), 36);
        assert_eq!(frame_index(10.0_f32.to_radians(), 36, 1), 37);
    }

    #[test]
    fn test_single_frame_sheet() {
        // Shots have one frame; every angle maps to it
        assert_eq!(frame_index(2.5, 1, 0), 0);
        assert_eq!(frame_index(-7.0, 1, 0), 0);
    }

    #[test]
    fn test_quantized_angle() {
        let q = quantized_angle(370.0_f32.to_radians(), 36);
        assert!((q - 10.0_f32.to_radians()).abs() < 1e-4);
        // Already on a frame boundary: unchanged
        let q = quantized_angle(20.0_f32.to_radians(), 36);
        assert!((q - 20.0_f32.to_radians()).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn frame_index_always_in_range(
            angle in -1000.0_f32..1000.0,
            num_frames in 1u32..=360,
        ) {
            let idx = frame_index(angle, num_frames, 0);
            prop_assert!(idx < num_frames);
        }

        #[test]
        fn quantized_angle_is_idempotent(
            angle in -100.0_f32..100.0,
            num_frames in 1u32..=120,
        ) {
            let q = quantized_angle(angle, num_frames);
            let qq = quantized_angle(q, num_frames);
            prop_assert!((q - qq).abs() < 1e-3);
        }
    }
}
