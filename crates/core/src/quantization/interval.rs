//! Signed conservative intervals for traversal.
//!
//! Traversal wants a `[lower, upper]` pair in signed value order, not a
//! low/high pair in magnitude order. The near code is the truncated
//! magnitude and the far code is always one step further from zero, so
//! for negative inputs the far code becomes the lower bound.
//!
//! Unlike [`Quantizer::quantize`], the input is not floored: inverse ray
//! directions are fractional.

use crate::error::Result;
use crate::quantization::code::QuantizedCode;
use crate::quantization::quantizer::Quantizer;
use serde::{Deserialize, Serialize};

/// Signed interval of two adjacent grid points enclosing a value.
///
/// Mantissa fields carry the marker bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInterval {
    pub sign: u8,
    pub lower_exponent: u8,
    pub lower_mantissa: u8,
    pub upper_exponent: u8,
    pub upper_mantissa: u8,
}

impl CodeInterval {
    pub fn lower(&self) -> QuantizedCode {
        QuantizedCode::from_fields(self.lower_exponent, self.lower_mantissa)
    }

    pub fn upper(&self) -> QuantizedCode {
        QuantizedCode::from_fields(self.upper_exponent, self.upper_mantissa)
    }

    /// Signed float values of `(lower, upper)`.
    pub fn decode(&self, shift: u32) -> (f32, f32) {
        (
            self.lower().decode(self.sign, shift),
            self.upper().decode(self.sign, shift),
        )
    }

    /// The five output fields in print order.
    pub fn fields(&self) -> [u8; 5] {
        [
            self.sign,
            self.lower_exponent,
            self.lower_mantissa,
            self.upper_exponent,
            self.upper_mantissa,
        ]
    }
}

impl Quantizer {
    /// Enclose `value` between two adjacent grid points.
    ///
    /// For every finite value inside the exponent window,
    /// `lower ≤ value ≤ upper` after decoding.
    pub fn interval(&self, value: f32) -> Result<CodeInterval> {
        let raw = self.check_domain(value)?;
        let near = QuantizedCode::truncate(raw, self.shift());
        let (far, _) = self.adjacent(near, false)?;

        let (lower, upper) = if raw.is_negative() {
            (far, near)
        } else {
            (near, far)
        };
        Ok(CodeInterval {
            sign: raw.sign,
            lower_exponent: lower.exponent,
            lower_mantissa: lower.marked_mantissa(),
            upper_exponent: upper.exponent,
            upper_mantissa: upper.marked_mantissa(),
        })
    }
}
