use crate::{
    color::{self, RGB},
    common::ValueRange,
    error::Result,
};

use super::{
    control_points::{ControlPoint, ControlPoints},
    ColorFunction,
};

/// Piecewise linear color function.
/// Colors are interpolated per channel in RGB space.
///
/// ```
/// # use slice_lib::transfer_functions::{ColorFunction, ColorTransferFunction};
/// let mut ctf = ColorTransferFunction::new();
/// ctf.add_rgb_point(0.0, 0.0, 0.0, 0.0).unwrap();
/// ctf.add_rgb_point(1.0, 1.0, 1.0, 1.0).unwrap();
/// assert_eq!(ctf.color_at(0.5).x, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTransferFunction {
    points: ControlPoints<RGB>,
}

impl ColorTransferFunction {
    pub fn new() -> ColorTransferFunction {
        ColorTransferFunction {
            points: ControlPoints::new(),
        }
    }

    /// From `(x, r, g, b)` tuples, NaN positions are skipped
    pub fn from_points(points: &[(f32, f32, f32, f32)]) -> ColorTransferFunction {
        ColorTransferFunction {
            points: ControlPoints::from_points(
                points.iter().map(|&(x, r, g, b)| (x, color::rgb(r, g, b))),
            ),
        }
    }

    /// Add control point, returns its index.
    /// Fails if `x` is NaN.
    pub fn add_rgb_point(&mut self, x: f32, r: f32, g: f32, b: f32) -> Result<usize> {
        self.points.add(x, color::rgb(r, g, b))
    }

    /// Remove first control point at `x`.
    /// Returns `false` if there is none.
    pub fn remove_point(&mut self, x: f32) -> bool {
        self.points.remove(x)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ControlPoint<RGB>] {
        self.points.as_slice()
    }
}

impl Default for ColorTransferFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorFunction for ColorTransferFunction {
    fn color_at(&self, value: f32) -> RGB {
        self.points
            .evaluate(value)
            .unwrap_or_else(|| color::rgb(0.0, 0.0, 0.0))
    }

    fn range(&self) -> ValueRange {
        self.points.range()
    }
}
