//!
//! Vizmath holds the small value types and scalar helpers a visualization
//! renderer is built on.
//!
//! - [`ColorRgba`] float colors and their packed `0xAARRGGBB` render form
//! - [`Vector3`] positions and directions
//! - [`math`] clamping, interpolation and float to byte conversion
//! - [`RandomSource`] explicitly seeded pseudo random numbers
//!
//! # Example
//!
//! ```
//! use vizmath::ColorRgba;
//! use vizmath::math::interpolate;
//!
//! let start = ColorRgba::from_bytes(255, 0, 0, 255);
//! let end = ColorRgba::BLUE;
//! let t = interpolate(0.0, 1.0, 0.5, false);
//! let blended = ColorRgba::lerp(&start, &end, t);
//! assert_eq!(blended.to_packed() >> 24, 0xff);
//! ```

pub mod color;
pub(crate) mod json;
pub mod math;
pub mod random;
pub mod vector;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use color::{ColorRgba, PackedColor, ParseColorError};
pub use random::RandomSource;
pub use vector::{Vector3, dot_product};
