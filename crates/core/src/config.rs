//! Global configuration constants for bvhq.
//!
//! Bit widths, masks, and exponent shifts of the quantized code layout are
//! defined here. These are compile-time constants; runtime configuration is
//! handled by [`QuantizerConfig`](crate::quantization::QuantizerConfig) and
//! CLI arguments in the `bvhq` binary.

/// IEEE-754 single-precision exponent bias.
pub const F32_EXPONENT_BIAS: u32 = 127;

/// Number of explicit mantissa bits in an IEEE-754 single-precision value.
pub const F32_MANTISSA_BITS: u32 = 23;

/// Mask for the 8-bit biased exponent after shifting it down to bit 0.
pub const F32_EXPONENT_MASK: u32 = 0xFF;

/// Mask for the 23-bit mantissa.
pub const F32_MANTISSA_MASK: u32 = (1 << F32_MANTISSA_BITS) - 1;

/// Sign bit of an IEEE-754 single-precision value.
pub const F32_SIGN_BIT: u32 = 1 << 31;

/// Width of the quantized exponent field.
pub const EXPONENT_BITS: u32 = 5;

/// Mask for the quantized exponent field.
pub const EXPONENT_MASK: u32 = (1 << EXPONENT_BITS) - 1;

/// Width of the quantized mantissa field (without the marker bit).
pub const MANTISSA_BITS: u32 = 7;

/// Mask for the quantized mantissa field (without the marker bit).
pub const MANTISSA_MASK: u32 = (1 << MANTISSA_BITS) - 1;

/// Right shift turning a 23-bit mantissa into its top [`MANTISSA_BITS`] bits.
pub const MANTISSA_TRUNCATION: u32 = F32_MANTISSA_BITS - MANTISSA_BITS;

/// Width of the combined `exponent | mantissa` code.
pub const CODE_BITS: u32 = EXPONENT_BITS + MANTISSA_BITS;

/// Mask for the 12-bit combined code. Adjacent codes wrap modulo `CODE_MASK + 1`.
pub const CODE_MASK: u32 = (1 << CODE_BITS) - 1;

/// Explicit leading-one marker set on every emitted mantissa field.
pub const MANTISSA_MARKER: u8 = 0x80;

/// Exponent shift for bounding-box coordinates: `127 + 7`.
///
/// Quantized exponent 0 maps to a biased exponent of 134 (`2^7`), so the
/// 5-bit window covers magnitudes in `[2^7, 2^39)`.
pub const BOX_EXPONENT_SHIFT: u32 = F32_EXPONENT_BIAS + 7;

/// Exponent shift for inverse ray directions.
///
/// Quantized exponent 0 maps to `2^0`, covering magnitudes in `[1, 2^32)`.
pub const RAY_EXPONENT_SHIFT: u32 = F32_EXPONENT_BIAS;

/// Default exponent shift used by [`quantize`](crate::quantization::quantize)
/// and the CLI.
pub const DEFAULT_EXPONENT_SHIFT: u32 = BOX_EXPONENT_SHIFT;

/// Largest biased exponent that still encodes a normal finite value.
pub const MAX_NORMAL_EXPONENT: u32 = 254;

/// Width of a sign-tagged packed code: `sign | exponent | marked mantissa`.
pub const PACKED_CODE_BITS: u32 = 1 + EXPONENT_BITS + 8;

/// Default number of colors in a visualization palette.
pub const DEFAULT_PALETTE_SIZE: u32 = 20;
