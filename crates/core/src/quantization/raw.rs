//! IEEE-754 single-precision bit decomposition.

use crate::config;

/// A 32-bit float split into its raw IEEE-754 fields.
///
/// Built from `f32::to_bits`, never from a numeric conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFloat {
    /// 1 for negative values (including `-0.0`), else 0.
    pub sign: u8,
    /// Biased exponent in `[0, 255]`.
    pub exponent: u32,
    /// 23-bit mantissa without the implicit leading one.
    pub mantissa: u32,
}

impl RawFloat {
    /// Decompose the bit pattern of `value`.
    pub fn from_f32(value: f32) -> Self {
        Self::from_bits(value.to_bits())
    }

    /// Decompose a raw bit pattern.
    pub fn from_bits(bits: u32) -> Self {
        Self {
            sign: u8::from(bits & config::F32_SIGN_BIT != 0),
            exponent: (bits >> config::F32_MANTISSA_BITS) & config::F32_EXPONENT_MASK,
            mantissa: bits & config::F32_MANTISSA_MASK,
        }
    }

    /// Reassemble the bit pattern. Fields are masked to their widths.
    pub fn to_bits(self) -> u32 {
        (u32::from(self.sign & 1) << 31)
            | ((self.exponent & config::F32_EXPONENT_MASK) << config::F32_MANTISSA_BITS)
            | (self.mantissa & config::F32_MANTISSA_MASK)
    }

    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.to_bits())
    }

    pub fn is_negative(self) -> bool {
        self.sign == 1
    }

    /// NaN and infinities carry the all-ones exponent.
    pub fn is_finite(self) -> bool {
        self.exponent != config::F32_EXPONENT_MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_eight() {
        let raw = RawFloat::from_f32(8.0);
        assert_eq!(raw.sign, 0);
        assert_eq!(raw.exponent, 130);
        assert_eq!(raw.mantissa, 0);
    }

    #[test]
    fn test_decompose_negative_three() {
        let raw = RawFloat::from_f32(-3.0);
        assert_eq!(raw.sign, 1);
        assert_eq!(raw.exponent, 128);
        assert_eq!(raw.mantissa, 0x40_0000);
        assert!(raw.is_negative());
    }

    #[test]
    fn test_bits_survive_reassembly() {
        for v in [0.0f32, -0.0, 1.5, -1234.5678, f32::MAX, f32::MIN_POSITIVE] {
            let raw = RawFloat::from_f32(v);
            assert_eq!(raw.to_bits(), v.to_bits(), "v={v}");
        }
    }

    #[test]
    fn test_non_finite_detection() {
        assert!(!RawFloat::from_f32(f32::NAN).is_finite());
        assert!(!RawFloat::from_f32(f32::INFINITY).is_finite());
        assert!(!RawFloat::from_f32(f32::NEG_INFINITY).is_finite());
        assert!(RawFloat::from_f32(f32::MAX).is_finite());
    }
}
