//! Error types for quantization.

use thiserror::Error;

/// Errors reported by a [`Quantizer`](crate::quantization::Quantizer).
///
/// Domain violations are only raised under
/// [`RangePolicy::Strict`](crate::quantization::RangePolicy::Strict);
/// the wrapping policy maps every input to some code.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum QuantizeError {
    /// Input was NaN or ±infinity.
    #[error("cannot quantize non-finite value {value}")]
    NonFinite {
        /// The offending input.
        value: f32,
    },

    /// Biased exponent falls outside the window covered by the 5-bit field.
    #[error("biased exponent {exponent} outside quantization window [{min}, {max}]")]
    ExponentOutOfRange {
        /// Biased IEEE-754 exponent of the input.
        exponent: u32,
        /// Smallest representable biased exponent (the shift).
        min: u32,
        /// Largest representable biased exponent.
        max: u32,
    },

    /// The adjacent code would wrap past the end of the 12-bit code space.
    #[error("adjacent code of {low:#05x} wraps the 12-bit code space (downward={downward})")]
    CodeBoundary {
        /// Combined low code.
        low: u16,
        /// Whether the step direction was downwards.
        downward: bool,
    },

    /// Exponent shift leaves part of the window outside the normal exponents.
    #[error("exponent shift {shift} invalid: window must lie within [1, 254]")]
    InvalidShift {
        /// The rejected shift.
        shift: u32,
    },

    /// Palette size is zero or too large to double.
    #[error("palette size {size} must be in [1, 2^31)")]
    InvalidPalette {
        /// The rejected size.
        size: u32,
    },
}

/// Convenience alias for quantizer results.
pub type Result<T> = std::result::Result<T, QuantizeError>;
