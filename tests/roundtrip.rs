//! Property-based checks on the bit-level primitives every layout relies
//! on: sign conventions, concatenation, and frame bit-addressing.

use gnss_navmsg::bits::{append, from_signed_magnitude, from_twos_complement, Frame};
use proptest::prelude::*;

proptest! {
    /// Any two's-complement value recovered from its own sign-extension
    /// falls back into the representable range for that width, and
    /// round-trips through write/read on a [`Frame`] unchanged.
    #[test]
    fn twos_complement_round_trips_through_a_frame(raw in 0u128..(1u128 << 24), width in 1u32..=24) {
        let raw = raw & ((1u128 << width) - 1);
        let half = 1i128 << (width - 1);
        let value = from_twos_complement(raw, width);
        prop_assert!(value >= -half && value < half);

        let mut frame = Frame::zeros(64);
        frame.set_window(10, width as u16, raw);
        prop_assert_eq!(frame.window(10, width as u16), raw);
    }

    /// GLONASS signed-magnitude: the sign bit alone determines sign, and
    /// flipping only that bit negates the decoded value without changing
    /// its magnitude. Sign bit set means negative.
    #[test]
    fn signed_magnitude_sign_bit_only_flips_sign(raw in 0u128..(1u128 << 16), width in 2u32..=16) {
        let raw = raw & ((1u128 << width) - 1);
        let sign_bit = 1u128 << (width - 1);
        let negative = from_signed_magnitude(raw | sign_bit, width);
        let positive = from_signed_magnitude(raw & !sign_bit, width);
        prop_assert_eq!(negative, -positive);
        prop_assert!(positive >= 0);
        prop_assert!(negative <= 0);
    }

    /// `append` is exactly concatenation: splitting the result back at
    /// `low_width` recovers both halves.
    #[test]
    fn append_then_split_recovers_both_halves(
        high in 0u128..(1u128 << 20),
        low in 0u128..(1u128 << 12),
    ) {
        let combined = append(high, low, 12);
        prop_assert_eq!(combined & ((1u128 << 12) - 1), low);
        prop_assert_eq!(combined >> 12, high);
    }

    /// Writing a window and reading it back, from either end of the
    /// frame, always agrees.
    #[test]
    fn frame_window_and_window_from_end_agree(
        start in 0u16..200,
        width in 1u16..16,
        raw in 0u128..(1u128 << 15),
    ) {
        let raw = raw & ((1u128 << width) - 1);
        let mut frame = Frame::zeros(300);
        frame.set_window(start, width, raw);
        prop_assert_eq!(frame.window(start, width), raw);
        let right_shift = 300 - start - width;
        prop_assert_eq!(frame.window_from_end(right_shift, width), raw);
    }
}
