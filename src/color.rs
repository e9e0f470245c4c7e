use std::fmt::{Display, Formatter};
use std::io::{self, Read, Write};
use std::str::FromStr;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
#[cfg(test)]
use fake::Dummy;
use log::warn;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::math::{float_to_byte, is_equal};

/// Floating point RGBA color.
///
/// Channels are nominally in `[0.0, 1.0]` but nothing enforces that; values
/// outside the range saturate only when packed. Equality is exact per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRgba {
    #[serde(with = "crate::json::f32_non_finite")]
    pub r: f32,
    #[serde(with = "crate::json::f32_non_finite")]
    pub g: f32,
    #[serde(with = "crate::json::f32_non_finite")]
    pub b: f32,
    #[serde(with = "crate::json::f32_non_finite")]
    pub a: f32,
}

impl Default for ColorRgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl ColorRgba {
    pub const WHITE: ColorRgba = ColorRgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: ColorRgba = ColorRgba::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: ColorRgba = ColorRgba::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: ColorRgba = ColorRgba::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: ColorRgba = ColorRgba::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from 0-255 components.
    ///
    /// Components outside that range are not clamped, they end up as
    /// channels below 0.0 or above 1.0.
    pub fn from_bytes(r: i32, g: i32, b: i32, a: i32) -> Self {
        if [r, g, b, a].iter().any(|c| !(0..=255).contains(c)) {
            warn!("Color components out of 0-255 range: ({r}, {g}, {b}, {a})");
        }
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Unpacks a `0xAARRGGBB` value, see [`ColorRgba::to_packed`]
    pub fn from_packed(packed: u32) -> Self {
        let a = ((packed >> 24) & 0xff) as f32;
        let r = ((packed >> 16) & 0xff) as f32;
        let g = ((packed >> 8) & 0xff) as f32;
        let b = (packed & 0xff) as f32;
        Self {
            r: r / 255.0,
            g: g / 255.0,
            b: b / 255.0,
            a: a / 255.0,
        }
    }

    pub fn set(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.r = r;
        self.g = g;
        self.b = b;
        self.a = a;
    }

    /// Linear blend of the color channels from `start` to `end`.
    ///
    /// The result is always opaque: alpha is 1.0 whatever the inputs are.
    pub fn lerp(start: &ColorRgba, end: &ColorRgba, ratio: f32) -> ColorRgba {
        ColorRgba {
            r: start.r * (1.0 - ratio) + end.r * ratio,
            g: start.g * (1.0 - ratio) + end.g * ratio,
            b: start.b * (1.0 - ratio) + end.b * ratio,
            a: 1.0,
        }
    }

    /// Packs the color as `0xAARRGGBB`, the format the renderer consumes.
    ///
    /// Each channel goes through [`float_to_byte`].
    pub fn to_packed(&self) -> u32 {
        let a = (float_to_byte(self.a) as u32) << 24;
        let r = (float_to_byte(self.r) as u32) << 16;
        let g = (float_to_byte(self.g) as u32) << 8;
        let b = float_to_byte(self.b) as u32;
        a | r | g | b
    }

    /// Channel wise comparison within an absolute tolerance
    pub fn approx_eq(&self, other: &ColorRgba, tolerance: f32) -> bool {
        is_equal(self.r, other.r, tolerance)
            && is_equal(self.g, other.g, tolerance)
            && is_equal(self.b, other.b, tolerance)
            && is_equal(self.a, other.a, tolerance)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for ColorRgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Writes the packed 8 bit form as `#AARRGGBB`.
///
/// This is lossy: parsing the output back gives channels rounded to the
/// nearest representable byte, not the original floats.
impl Display for ColorRgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", PackedColor::from(*self))
    }
}

impl FromStr for ColorRgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<PackedColor>().map(ColorRgba::from)
    }
}

/// A packed `0xAARRGGBB` render color.
///
/// In JSON this is the string `"#AARRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Dummy))]
pub struct PackedColor(pub u32);

impl PackedColor {
    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(&self) -> u8 {
        self.0 as u8
    }
}

impl From<ColorRgba> for PackedColor {
    fn from(color: ColorRgba) -> Self {
        PackedColor(color.to_packed())
    }
}

impl From<PackedColor> for ColorRgba {
    fn from(packed: PackedColor) -> Self {
        ColorRgba::from_packed(packed.0)
    }
}

impl Display for PackedColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    InvalidLength(usize),
    MissingHash,
    InvalidHex(String),
}

impl std::error::Error for ParseColorError {}

impl Display for ParseColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => write!(
                f,
                "Invalid color format, expected #AARRGGBB (9 characters), got {len} characters"
            ),
            ParseColorError::MissingHash => {
                write!(f, "Invalid color format, expected #AARRGGBB")
            }
            ParseColorError::InvalidHex(digits) => {
                write!(f, "Invalid hex digits in color: {digits}")
            }
        }
    }
}

impl FromStr for PackedColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 9 {
            return Err(ParseColorError::InvalidLength(s.len()));
        }
        let digits = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;
        // from_str_radix accepts a leading sign, we don't
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(digits.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(PackedColor)
            .map_err(|_| ParseColorError::InvalidHex(digits.to_string()))
    }
}

impl Serialize for PackedColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PackedColor {
    fn deserialize<D>(deserializer: D) -> Result<PackedColor, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Writes the packed form of each color as a little endian `u32`
#[instrument(skip_all, fields(count = colors.len()))]
pub fn write_packed<W: Write>(colors: &[ColorRgba], mut writer: W) -> io::Result<()> {
    for color in colors {
        writer.write_u32::<LittleEndian>(color.to_packed())?;
    }
    writer.flush()
}

// count comes from the caller, not from data we have seen yet
const MAX_PREALLOCATED_COLORS: usize = 4096;

/// Reads `count` little endian packed colors
#[instrument(skip(reader))]
pub fn read_packed<R: Read>(mut reader: R, count: usize) -> io::Result<Vec<u32>> {
    let mut packed = Vec::with_capacity(count.min(MAX_PREALLOCATED_COLORS));
    for _ in 0..count {
        packed.push(reader.read_u32::<LittleEndian>()?);
    }
    Ok(packed)
}
