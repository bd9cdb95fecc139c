//! 12-bit quantized codes and their inverse.
//!
//! A [`QuantizedCode`] is a 5-bit re-biased exponent followed by the top 7
//! mantissa bits. Viewed as the combined integer `(exponent << 7) | mantissa`,
//! codes are ordered by magnitude, so "one grid step up" is simply `+ 1`,
//! with mantissa overflow carrying into the exponent.

use crate::config;
use crate::quantization::raw::RawFloat;
use serde::{Deserialize, Serialize};

/// One grid point of the quantized magnitude lattice.
///
/// The derived ordering compares `exponent` first, then `mantissa`, which is
/// the same as comparing [`combined`](Self::combined) values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct QuantizedCode {
    /// Re-biased exponent in `[0, 31]`.
    pub exponent: u8,
    /// Top 7 mantissa bits in `[0, 127]`, without the marker bit.
    pub mantissa: u8,
}

impl QuantizedCode {
    /// Truncate a raw float onto the grid defined by `shift`.
    ///
    /// The exponent is re-biased with wrapping arithmetic and masked to 5
    /// bits, so out-of-window exponents alias into the window.
    pub fn truncate(raw: RawFloat, shift: u32) -> Self {
        Self {
            exponent: (raw.exponent.wrapping_sub(shift) & config::EXPONENT_MASK) as u8,
            mantissa: (raw.mantissa >> config::MANTISSA_TRUNCATION) as u8,
        }
    }

    /// Split a combined code. Bits above the 12-bit field are discarded.
    pub fn from_combined(code: u16) -> Self {
        let code = u32::from(code) & config::CODE_MASK;
        Self {
            exponent: (code >> config::MANTISSA_BITS) as u8,
            mantissa: (code & config::MANTISSA_MASK) as u8,
        }
    }

    /// Rebuild a code from emitted fields, stripping the marker bit.
    pub fn from_fields(exponent_field: u8, mantissa_field: u8) -> Self {
        Self {
            exponent: exponent_field & config::EXPONENT_MASK as u8,
            mantissa: mantissa_field & config::MANTISSA_MASK as u8,
        }
    }

    /// `(exponent << 7) | mantissa`.
    pub fn combined(self) -> u16 {
        ((u16::from(self.exponent) << config::MANTISSA_BITS) | u16::from(self.mantissa))
            & config::CODE_MASK as u16
    }

    /// Mantissa with the explicit leading-one marker in bit 7.
    pub fn marked_mantissa(self) -> u8 {
        self.mantissa | config::MANTISSA_MARKER
    }

    /// The adjacent grid point, one step down when `downward` is set and one
    /// step up otherwise.
    ///
    /// Returns the neighbour and whether the step wrapped around the 12-bit
    /// code space (`0 - 1 = 4095`, `4095 + 1 = 0`).
    pub fn step(self, downward: bool) -> (Self, bool) {
        let code = u32::from(self.combined());
        let (next, wrapped) = if downward {
            (code.wrapping_sub(1), code == 0)
        } else {
            (code + 1, code == config::CODE_MASK)
        };
        (
            Self::from_combined((next & config::CODE_MASK) as u16),
            wrapped,
        )
    }

    /// Whether [`step`](Self::step) in the given direction would wrap.
    pub fn at_boundary(self, downward: bool) -> bool {
        let code = u32::from(self.combined());
        if downward {
            code == 0
        } else {
            code == config::CODE_MASK
        }
    }

    /// Reconstruct the float this code stands for.
    pub fn decode(self, sign: u8, shift: u32) -> f32 {
        decode_with_shift(sign, self.exponent, self.mantissa, shift)
    }
}

/// Decode emitted fields with the default box shift.
///
/// `mantissa_field` may carry the marker bit; it is ignored.
pub fn decode(sign: u8, exponent_field: u8, mantissa_field: u8) -> f32 {
    decode_with_shift(
        sign,
        exponent_field,
        mantissa_field,
        config::DEFAULT_EXPONENT_SHIFT,
    )
}

/// Decode emitted fields: `exponent = (exponent_field + shift) & 0xFF`,
/// `mantissa = (mantissa_field & 0x7F) << 16`.
pub fn decode_with_shift(sign: u8, exponent_field: u8, mantissa_field: u8, shift: u32) -> f32 {
    RawFloat {
        sign: sign & 1,
        exponent: u32::from(exponent_field).wrapping_add(shift) & config::F32_EXPONENT_MASK,
        mantissa: (u32::from(mantissa_field) & config::MANTISSA_MASK)
            << config::MANTISSA_TRUNCATION,
    }
    .to_f32()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_top_mantissa_bits() {
        // 200 = 1.5625 * 2^7 -> exponent 134, mantissa top bits 0b1001000
        let code = QuantizedCode::truncate(RawFloat::from_f32(200.0), 134);
        assert_eq!(code.exponent, 0);
        assert_eq!(code.mantissa, 72);
        assert_eq!(code.combined(), 72);
    }

    #[test]
    fn test_truncate_wraps_low_exponents() {
        // 8.0 has biased exponent 130, four below the window
        let code = QuantizedCode::truncate(RawFloat::from_f32(8.0), 134);
        assert_eq!(code.exponent, 28);
        assert_eq!(code.mantissa, 0);
    }

    #[test]
    fn test_step_carries_into_exponent() {
        let code = QuantizedCode {
            exponent: 3,
            mantissa: 127,
        };
        let (up, wrapped) = code.step(false);
        assert!(!wrapped);
        assert_eq!(
            up,
            QuantizedCode {
                exponent: 4,
                mantissa: 0
            }
        );
        let (back, wrapped) = up.step(true);
        assert!(!wrapped);
        assert_eq!(back, code);
    }

    #[test]
    fn test_step_wraps_at_extremes() {
        let bottom = QuantizedCode::from_combined(0);
        assert!(bottom.at_boundary(true));
        let (below, wrapped) = bottom.step(true);
        assert!(wrapped);
        assert_eq!(below.combined(), 4095);
        assert_eq!(below.exponent, 31);
        assert_eq!(below.mantissa, 127);

        let top = QuantizedCode::from_combined(4095);
        assert!(top.at_boundary(false));
        let (above, wrapped) = top.step(false);
        assert!(wrapped);
        assert_eq!(above.combined(), 0);
    }

    #[test]
    fn test_ordering_matches_combined() {
        let a = QuantizedCode {
            exponent: 2,
            mantissa: 127,
        };
        let b = QuantizedCode {
            exponent: 3,
            mantissa: 0,
        };
        assert!(a < b);
        assert!(a.combined() < b.combined());
    }

    #[test]
    fn test_from_fields_strips_marker() {
        let code = QuantizedCode::from_fields(28, 0x80 | 5);
        assert_eq!(code.exponent, 28);
        assert_eq!(code.mantissa, 5);
        assert_eq!(code.marked_mantissa(), 0x85);
    }

    #[test]
    fn test_decode_window_endpoints() {
        assert_eq!(decode(0, 0, 0x80), 128.0);
        assert_eq!(decode(0, 0, 0x80 | 72), 200.0);
        assert_eq!(decode(1, 0, 0x80 | 72), -200.0);
        let top = decode(0, 31, 0xFF);
        assert_eq!(top, (1.0 + 127.0 / 128.0) * 2f32.powi(38));
    }

    #[test]
    fn test_decode_with_ray_shift() {
        assert_eq!(decode_with_shift(0, 0, 0, 127), 1.0);
        assert_eq!(decode_with_shift(0, 1, 64, 127), 3.0);
    }
}
