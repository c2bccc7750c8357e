//! RGBA colors and the hex notation used to pick a target color.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest value accepted by [`Rgba::from_rgb24`] and [`Rgba::from_hex`].
pub const MAX_RGB24: u32 = 0x00FF_FFFF;

/// One 8-bit-per-channel RGBA color. Equality is exact on all four channels.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque pure green, the marker color used when none is given.
    pub const DEFAULT_TARGET: Rgba = Rgba::new(0, 255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Build an opaque color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are rejected rather than truncated.
    pub fn from_rgb24(value: u32) -> Result<Self, ColorParseError> {
        if value > MAX_RGB24 {
            return Err(ColorParseError::OutOfRange { value });
        }
        Ok(Self::opaque(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }

    /// Parse `RRGGBB`-style hex text (an optional `0x` prefix is allowed).
    ///
    /// Shorter inputs are read as integers, so `"ff"` is `0x0000ff` (blue).
    pub fn from_hex(text: &str) -> Result<Self, ColorParseError> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit {
                input: text.to_owned(),
            });
        }
        // All digits are valid at this point, so the only failure left is overflow.
        let value = u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::Overflow {
            input: text.to_owned(),
        })?;
        Self::from_rgb24(value)
    }

    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::DEFAULT_TARGET
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Errors from parsing a target color.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,
    #[error("invalid hex color {input:?}")]
    InvalidDigit { input: String },
    #[error("hex color {input:?} does not fit in 24 bits")]
    Overflow { input: String },
    #[error("color value {value:#x} exceeds 0xffffff")]
    OutOfRange { value: u32 },
}
