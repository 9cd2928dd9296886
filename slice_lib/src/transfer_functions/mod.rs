//! # Transfer functions
//!
//! Continuous mappings from a sample value to color or opacity.
//! Lookup tables are sampled from objects implementing [`ColorFunction`]
//! and [`OpacityFunction`], so any piecewise or analytic function can be used.
//! Evaluation outside of `range()` should clamp to the boundary value.

mod color_tf;
mod control_points;
mod piecewise;

pub use color_tf::ColorTransferFunction;
pub use control_points::ControlPoint;
pub use piecewise::PiecewiseFunction;

use crate::{color::RGB, common::ValueRange};

/// Maps sample value to RGB color, channels <0;1>
pub trait ColorFunction {
    fn color_at(&self, value: f32) -> RGB;

    /// Domain of the function
    fn range(&self) -> ValueRange;
}

/// Maps sample value to opacity <0;1>
pub trait OpacityFunction {
    fn opacity_at(&self, value: f32) -> f32;

    /// Domain of the function
    fn range(&self) -> ValueRange;
}
