//! Packed codes and the spatial color seam.
//!
//! Visualization tooling colors quantized points by cluster. The hashing
//! routine that turns three packed coordinates into a color is external and
//! is injected through [`SpatialColorer`]; this module only builds its inputs
//! and folds its output into a palette.

use crate::config;
use crate::error::{QuantizeError, Result};
use crate::quantization::{QuantizedCode, RawFloat};

/// 14-bit sign-tagged code: `(sign << 13) | (exponent << 8) | marked mantissa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedCode(u16);

impl PackedCode {
    /// Pack the truncated code of `value`. The input is not floored.
    pub fn encode(value: f32, shift: u32) -> Self {
        let raw = RawFloat::from_f32(value);
        let code = QuantizedCode::truncate(raw, shift);
        Self(
            (u16::from(raw.sign) << (config::PACKED_CODE_BITS - 1))
                | (u16::from(code.exponent) << 8)
                | u16::from(code.marked_mantissa()),
        )
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn sign(self) -> u8 {
        (self.0 >> (config::PACKED_CODE_BITS - 1)) as u8 & 1
    }

    pub fn code(self) -> QuantizedCode {
        QuantizedCode::from_fields((self.0 >> 8) as u8, self.0 as u8)
    }

    /// Lowest bit of the quantized exponent.
    pub fn exponent_lsb(self) -> bool {
        self.0 & (1 << 8) != 0
    }
}

/// Concatenate three packed codes into a 42-bit key, `x` in the top bits.
pub fn point_key([x, y, z]: [PackedCode; 3]) -> u64 {
    let width = config::PACKED_CODE_BITS;
    (u64::from(x.bits()) << (2 * width)) | (u64::from(y.bits()) << width) | u64::from(z.bits())
}

/// XOR of the exponent low bits of the three coordinates.
pub fn exponent_parity([x, y, z]: [PackedCode; 3]) -> bool {
    x.exponent_lsb() ^ y.exponent_lsb() ^ z.exponent_lsb()
}

/// Maps three packed coordinates to a color or cluster id.
///
/// Implementations are opaque to this crate. Closures work directly.
pub trait SpatialColorer {
    fn color(&self, x: u32, y: u32, z: u32) -> u32;
}

impl<F> SpatialColorer for F
where
    F: Fn(u32, u32, u32) -> u32,
{
    fn color(&self, x: u32, y: u32, z: u32) -> u32 {
        self(x, y, z)
    }
}

/// Folds colorer output into `2 * size` buckets.
///
/// Points whose exponent parity is odd land in the upper half, so the two
/// quantization grids can be told apart in a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    size: u32,
    shift: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            size: config::DEFAULT_PALETTE_SIZE,
            shift: config::DEFAULT_EXPONENT_SHIFT,
        }
    }
}

impl Palette {
    /// `size` must be in `[1, 2^31)` so that `2 * size` buckets fit in a u32.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 || size > u32::MAX / 2 {
            return Err(QuantizeError::InvalidPalette { size });
        }
        Ok(Self {
            size,
            ..Self::default()
        })
    }

    pub fn with_shift(mut self, shift: u32) -> Self {
        self.shift = shift;
        self
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of buckets.
    pub fn buckets(&self) -> u32 {
        self.size * 2
    }

    /// Bucket of a single point.
    pub fn bucket<C: SpatialColorer + ?Sized>(&self, colorer: &C, point: [f32; 3]) -> u32 {
        let codes = point.map(|v| PackedCode::encode(v, self.shift));
        let [x, y, z] = codes.map(|c| u32::from(c.bits()));
        let base = colorer.color(x, y, z) % self.size;
        if exponent_parity(codes) {
            base + self.size
        } else {
            base
        }
    }

    /// Buckets for a batch of points, in input order.
    pub fn color_points<C: SpatialColorer + ?Sized>(
        &self,
        colorer: &C,
        points: &[[f32; 3]],
    ) -> Vec<u32> {
        points.iter().map(|&p| self.bucket(colorer, p)).collect()
    }
}
