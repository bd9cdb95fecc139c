//! Property tests for the bracketing and adjacency guarantees.

use bvhq_core::config::{BOX_EXPONENT_SHIFT, CODE_MASK, RAY_EXPONENT_SHIFT};
use bvhq_core::quantization::{decode, quantize, Quantizer, QuantizerConfig, RangePolicy};
use bvhq_core::QuantizeError;
use proptest::prelude::*;

fn strict(shift: u32) -> Quantizer {
    Quantizer::new(QuantizerConfig {
        exponent_shift: shift,
        range_policy: RangePolicy::Strict,
    })
    .unwrap()
}

/// Positive floats whose biased exponent lies inside the window of `shift`.
fn in_window(shift: u32) -> impl Strategy<Value = f32> {
    (shift..=shift + 31, 0u32..(1 << 23)).prop_map(|(e, m)| f32::from_bits((e << 23) | m))
}

fn any_f32() -> impl Strategy<Value = f32> {
    any::<u32>().prop_map(f32::from_bits)
}

proptest! {
    #[test]
    fn prop_non_negative_values_are_bracketed(v in in_window(BOX_EXPONENT_SHIFT)) {
        let q = strict(BOX_EXPONENT_SHIFT);
        let floored = v.floor();
        match q.quantize(v) {
            Ok(b) => {
                let (lo, hi) = q.decode(&b);
                prop_assert!(lo <= floored && floored <= hi, "lo={lo} v={floored} hi={hi}");
                prop_assert_eq!(b.high().combined(), b.low().combined() + 1);
            }
            Err(e) => {
                // only the very top grid point has no upper neighbour
                prop_assert_eq!(e, QuantizeError::CodeBoundary { low: CODE_MASK as u16, downward: false });
            }
        }
    }

    #[test]
    fn prop_negative_low_never_undershoots(v in in_window(BOX_EXPONENT_SHIFT)) {
        let q = strict(BOX_EXPONENT_SHIFT);
        let floored = (-v).floor();
        if let Ok(b) = q.quantize(-v) {
            prop_assert_eq!(b.sign, 1);
            prop_assert!(b.decode_low(q.shift()) >= floored);
            prop_assert_eq!(b.high().combined() + 1, b.low().combined());
        }
    }

    #[test]
    fn prop_interval_encloses_value(v in in_window(RAY_EXPONENT_SHIFT), negative in any::<bool>()) {
        let q = strict(RAY_EXPONENT_SHIFT);
        let v = if negative { -v } else { v };
        match q.interval(v) {
            Ok(iv) => {
                let (lo, hi) = iv.decode(q.shift());
                prop_assert!(lo <= v && v <= hi, "lo={lo} v={v} hi={hi}");
                prop_assert!(lo < hi);
            }
            Err(e) => {
                prop_assert_eq!(e, QuantizeError::CodeBoundary { low: CODE_MASK as u16, downward: false });
            }
        }
    }

    #[test]
    fn prop_codes_are_adjacent_modulo_field(v in any_f32()) {
        let b = quantize(v);
        let low = u32::from(b.low().combined());
        let high = u32::from(b.high().combined());
        let step = if b.sign == 1 { CODE_MASK } else { 1 };
        prop_assert_eq!((low + step) & CODE_MASK, high);
    }

    #[test]
    fn prop_marker_bits_always_set(v in any_f32()) {
        let b = quantize(v);
        prop_assert_eq!(b.low_mantissa & 0x80, 0x80);
        prop_assert_eq!(b.high_mantissa & 0x80, 0x80);
        prop_assert!(b.low_exponent < 32 && b.high_exponent < 32);
    }

    #[test]
    fn prop_quantize_is_deterministic(v in any_f32()) {
        prop_assert_eq!(quantize(v), quantize(v));
        let q = Quantizer::default();
        prop_assert_eq!(q.quantize(v), Ok(quantize(v)));
    }

    #[test]
    fn prop_decoded_low_is_a_fixed_point(v in in_window(BOX_EXPONENT_SHIFT)) {
        let b = quantize(v);
        let lo = decode(b.sign, b.low_exponent, b.low_mantissa);
        prop_assert_eq!(quantize(lo).low(), b.low());
    }
}
