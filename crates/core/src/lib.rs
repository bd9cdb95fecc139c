//! # bvhq-core
//!
//! Quantizes f32 coordinates into pairs of reduced-precision codes that
//! conservatively bracket the original value, for compact BVH bounding boxes.
//!
//! The library is pure and synchronous: every operation is a constant-time
//! bit transform with no shared state, safe to call from any thread.

/// Packed sign-tagged codes, point keys, and the injected spatial colorer.
pub mod color;
/// Global configuration constants: field widths, masks, and exponent shifts.
pub mod config;
/// Error type returned by strict quantization.
pub mod error;
/// Float quantizer: bit decomposition, low/high codes, intervals, and decoding.
pub mod quantization;

pub use error::{QuantizeError, Result};
pub use quantization::{quantize, QuantizedBounds, Quantizer, QuantizerConfig, RangePolicy};
