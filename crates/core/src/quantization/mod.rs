//! Conservative float quantization for BVH bounding boxes.
//!
//! An f32 is split into its IEEE-754 fields, the exponent is re-biased into a
//! 5-bit field, and the mantissa is truncated to 7 bits. Together they form a
//! 12-bit code on a magnitude grid; the adjacent grid point supplies the
//! second bound, so a box stored as codes never shrinks below the original.

/// 12-bit codes, grid steps, and decoding back to f32.
pub mod code;
/// Signed `[lower, upper]` intervals used by ray traversal.
pub mod interval;
/// The quantizer, its configuration, and the low/high output.
pub mod quantizer;
/// IEEE-754 single-precision bit decomposition.
pub mod raw;

pub use code::{decode, decode_with_shift, QuantizedCode};
pub use interval::CodeInterval;
pub use quantizer::{quantize, QuantizedBounds, Quantizer, QuantizerConfig, RangePolicy};
pub use raw::RawFloat;
