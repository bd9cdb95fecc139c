//! Float quantizer: f32 → (sign, low code, high code).
//!
//! [`QuantizerConfig`] picks the exponent shift and what happens to inputs
//! the 5-bit exponent window cannot represent. [`Quantizer`] applies it.

use crate::config;
use crate::error::{QuantizeError, Result};
use crate::quantization::code::QuantizedCode;
use crate::quantization::raw::RawFloat;
use serde::{Deserialize, Serialize};

/// How out-of-domain inputs are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Mask exponents and adjacent codes to their field widths. Every input
    /// yields a code; out-of-window inputs yield aliased codes. Matches codes
    /// already stored by existing tooling.
    #[default]
    Wrap,
    /// Reject non-finite inputs, out-of-window exponents, and adjacent codes
    /// that would wrap the 12-bit code space.
    Strict,
}

/// Configuration for a [`Quantizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantizerConfig {
    /// Biased exponent that maps to quantized exponent 0.
    pub exponent_shift: u32,
    /// Handling of inputs outside the representable window.
    #[serde(default)]
    pub range_policy: RangePolicy,
}

impl Default for QuantizerConfig {
    fn default() -> Self {
        Self {
            exponent_shift: config::DEFAULT_EXPONENT_SHIFT,
            range_policy: RangePolicy::Wrap,
        }
    }
}

impl QuantizerConfig {
    /// Bounding-box coordinates (shift 134).
    pub fn boxes() -> Self {
        Self::default()
    }

    /// Inverse ray directions (shift 127).
    pub fn rays() -> Self {
        Self {
            exponent_shift: config::RAY_EXPONENT_SHIFT,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, range_policy: RangePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }

    /// Smallest and largest biased exponents covered by the 5-bit field.
    pub fn window(&self) -> (u32, u32) {
        (
            self.exponent_shift,
            self.exponent_shift + config::EXPONENT_MASK,
        )
    }

    /// The whole window must consist of normal finite exponents.
    pub fn validate(&self) -> Result<()> {
        let shift = self.exponent_shift;
        if shift == 0 || shift > config::MAX_NORMAL_EXPONENT - config::EXPONENT_MASK {
            return Err(QuantizeError::InvalidShift { shift });
        }
        Ok(())
    }
}

/// Output of [`Quantizer::quantize`].
///
/// Mantissa fields carry the marker bit. For non-negative inputs `high` is
/// one grid step above `low`; for negative inputs it is one step below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantizedBounds {
    pub sign: u8,
    pub low_exponent: u8,
    pub low_mantissa: u8,
    pub high_exponent: u8,
    pub high_mantissa: u8,
}

impl QuantizedBounds {
    fn new(sign: u8, low: QuantizedCode, high: QuantizedCode) -> Self {
        Self {
            sign,
            low_exponent: low.exponent,
            low_mantissa: low.marked_mantissa(),
            high_exponent: high.exponent,
            high_mantissa: high.marked_mantissa(),
        }
    }

    pub fn low(&self) -> QuantizedCode {
        QuantizedCode::from_fields(self.low_exponent, self.low_mantissa)
    }

    pub fn high(&self) -> QuantizedCode {
        QuantizedCode::from_fields(self.high_exponent, self.high_mantissa)
    }

    pub fn is_negative(&self) -> bool {
        self.sign == 1
    }

    /// Signed float for the low code.
    pub fn decode_low(&self, shift: u32) -> f32 {
        self.low().decode(self.sign, shift)
    }

    /// Signed float for the high code.
    pub fn decode_high(&self, shift: u32) -> f32 {
        self.high().decode(self.sign, shift)
    }

    /// The five output fields in print order.
    pub fn fields(&self) -> [u8; 5] {
        [
            self.sign,
            self.low_exponent,
            self.low_mantissa,
            self.high_exponent,
            self.high_mantissa,
        ]
    }
}

/// Stateless quantizer bound to one [`QuantizerConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quantizer {
    config: QuantizerConfig,
}

impl Quantizer {
    /// Create a quantizer, validating the exponent shift.
    pub fn new(config: QuantizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &QuantizerConfig {
        &self.config
    }

    pub fn shift(&self) -> u32 {
        self.config.exponent_shift
    }

    /// Floor `value`, truncate it onto the grid, and derive the adjacent code.
    pub fn quantize(&self, value: f32) -> Result<QuantizedBounds> {
        let raw = self.check_domain(value.floor())?;
        let low = QuantizedCode::truncate(raw, self.shift());
        let (high, wrapped) = self.adjacent(low, raw.is_negative())?;

        tracing::trace!(
            value,
            low = low.combined(),
            high = high.combined(),
            wrapped,
            "quantized"
        );
        Ok(QuantizedBounds::new(raw.sign, low, high))
    }

    /// Decode the low and high codes of `bounds` with this quantizer's shift.
    pub fn decode(&self, bounds: &QuantizedBounds) -> (f32, f32) {
        (
            bounds.decode_low(self.shift()),
            bounds.decode_high(self.shift()),
        )
    }

    /// Decompose `value` and apply the range policy to its exponent.
    pub(crate) fn check_domain(&self, value: f32) -> Result<RawFloat> {
        let raw = RawFloat::from_f32(value);
        let (min, max) = self.config.window();
        let in_window = (min..=max).contains(&raw.exponent);

        match self.config.range_policy {
            RangePolicy::Strict if !raw.is_finite() => Err(QuantizeError::NonFinite { value }),
            RangePolicy::Strict if !in_window => Err(QuantizeError::ExponentOutOfRange {
                exponent: raw.exponent,
                min,
                max,
            }),
            RangePolicy::Wrap if !in_window => {
                tracing::debug!(
                    value,
                    exponent = raw.exponent,
                    min,
                    max,
                    "exponent outside quantization window, wrapping"
                );
                Ok(raw)
            }
            _ => Ok(raw),
        }
    }

    /// Step from `code` to its neighbour, applying the range policy at the
    /// edges of the code space.
    pub(crate) fn adjacent(
        &self,
        code: QuantizedCode,
        downward: bool,
    ) -> Result<(QuantizedCode, bool)> {
        if self.config.range_policy == RangePolicy::Strict && code.at_boundary(downward) {
            return Err(QuantizeError::CodeBoundary {
                low: code.combined(),
                downward,
            });
        }
        let (next, wrapped) = code.step(downward);
        if wrapped {
            tracing::debug!(
                code = code.combined(),
                next = next.combined(),
                "adjacent code wrapped"
            );
        }
        Ok((next, wrapped))
    }
}

/// Quantize with the default configuration (shift 134, wrapping).
///
/// Never fails: wrapping maps every input to some code.
pub fn quantize(value: f32) -> QuantizedBounds {
    let raw = RawFloat::from_f32(value.floor());
    let low = QuantizedCode::truncate(raw, config::DEFAULT_EXPONENT_SHIFT);
    let (high, _) = low.step(raw.is_negative());
    QuantizedBounds::new(raw.sign, low, high)
}
