//! # 2D images
//!
//! Slices produced by [`crate::volumetric::Reslice`] and their colorized form.
//! [`ImageMapToRgba`] colors a scalar image through a lookup table built from
//! a color function and an opacity function.

use std::sync::Arc;

use log::debug;
use nalgebra::Vector2;

use crate::{
    color::{self, RGBA},
    common::ValueRange,
    error::{Error, Result},
    lut::{LookupTable, LookupTableBuilder},
    transfer_functions::{ColorFunction, OpacityFunction},
};

/// Image of scalar samples, row major
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarImage {
    size: Vector2<usize>,
    data: Vec<f32>,
}

impl ScalarImage {
    /// Image filled with zeros
    pub fn new(size: Vector2<usize>) -> ScalarImage {
        ScalarImage {
            size,
            data: vec![0.0; size.x * size.y],
        }
    }

    pub fn from_data(size: Vector2<usize>, data: Vec<f32>) -> Result<ScalarImage> {
        let expected = size.x * size.y;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(ScalarImage { size, data })
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.size.x
    }

    pub fn size(&self) -> Vector2<usize> {
        self.size
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        self.data.get(self.index(x, y)).copied()
    }

    /// Out of bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        if x >= self.size.x || y >= self.size.y {
            return;
        }
        let index = self.index(x, y);
        self.data[index] = value;
    }

    /// Per pixel product with `mask`
    pub fn apply_mask(&self, mask: &ScalarImage) -> Result<ScalarImage> {
        if mask.size != self.size {
            return Err(Error::SizeMismatch {
                expected: self.size,
                actual: mask.size,
            });
        }
        let data = self
            .data
            .iter()
            .zip(mask.data.iter())
            .map(|(v, m)| v * m)
            .collect();
        Ok(ScalarImage {
            size: self.size,
            data,
        })
    }

    /// Multiply every sample by `factor`
    pub fn scale(&self, factor: f32) -> ScalarImage {
        ScalarImage {
            size: self.size,
            data: self.data.iter().map(|v| v * factor).collect(),
        }
    }

    pub fn value_range(&self) -> ValueRange {
        ValueRange::from_samples(self.data.iter())
    }
}

/// Image of RGBA colors, row major
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaImage {
    size: Vector2<usize>,
    data: Vec<RGBA>,
}

impl RgbaImage {
    pub fn size(&self) -> Vector2<usize> {
        self.size
    }

    pub fn data(&self) -> &[RGBA] {
        &self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<RGBA> {
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        self.data.get(x + y * self.size.x).copied()
    }

    /// 4 bytes per pixel, R G B A
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().flat_map(|&c| color::to_bytes(c)).collect()
    }
}

/// Colors scalar images with a color function and an opacity function.
/// Lets a slice share the transfer functions of a volume.
#[derive(Debug, Default)]
pub struct ImageMapToRgba {
    builder: LookupTableBuilder,
}

impl ImageMapToRgba {
    pub fn new() -> ImageMapToRgba {
        ImageMapToRgba {
            builder: LookupTableBuilder::new(),
        }
    }

    pub fn set_color_function(&mut self, function: Option<Arc<dyn ColorFunction>>) {
        self.builder.set_color_function(function);
    }

    pub fn set_opacity_function(&mut self, function: Option<Arc<dyn OpacityFunction>>) {
        self.builder.set_opacity_function(function);
    }

    /// Number of colors in the lookup table, at least 2
    pub fn set_number_of_colors(&mut self, n: usize) -> Result<()> {
        self.builder.set_table_size(n)
    }

    pub fn number_of_colors(&self) -> usize {
        self.builder.table_size()
    }

    pub fn lookup_table(&self) -> &LookupTable {
        self.builder.table()
    }

    pub fn map(&self, image: &ScalarImage) -> RgbaImage {
        let table = self.builder.table();
        let data = image.data.iter().map(|&v| table.map_value(v)).collect();

        debug!("Mapped image {}x{} to RGBA", image.size.x, image.size.y);

        RgbaImage {
            size: image.size,
            data,
        }
    }
}
