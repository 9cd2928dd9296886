//! # slice_lib
//!
//! Colorizing volume slices with transfer functions.
//!
//! A [`lut::LookupTableBuilder`] samples a color function and an opacity
//! function into an RGBA lookup table. [`image::ImageMapToRgba`] maps slices
//! through that table, so a slice can share transfer functions with a volume
//! rendering. [`volumetric`] extracts masked slices from in-memory volumes.

pub mod color;
pub mod common;
pub mod error;
pub mod image;
pub mod lut;
pub mod premade;
pub mod test_helpers;
pub mod transfer_functions;
pub mod volumetric;

pub use error::{Error, Result};
pub use lut::{LookupTable, LookupTableBuilder};
