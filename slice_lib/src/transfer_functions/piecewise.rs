use crate::{common::ValueRange, error::Result};

use super::{
    control_points::{ControlPoint, ControlPoints},
    OpacityFunction,
};

/// Piecewise linear scalar function, used for opacity.
///
/// Two points with the same `x` make a step,
/// the later point is used at exactly `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseFunction {
    points: ControlPoints<f32>,
}

impl PiecewiseFunction {
    pub fn new() -> PiecewiseFunction {
        PiecewiseFunction {
            points: ControlPoints::new(),
        }
    }

    /// From `(x, y)` pairs, NaN positions are skipped
    pub fn from_points(points: &[(f32, f32)]) -> PiecewiseFunction {
        PiecewiseFunction {
            points: ControlPoints::from_points(points.iter().copied()),
        }
    }

    /// Add control point, returns its index.
    /// Fails if `x` is NaN.
    pub fn add_point(&mut self, x: f32, y: f32) -> Result<usize> {
        self.points.add(x, y)
    }

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

    pub fn points(&self) -> &[ControlPoint<f32>] {
        self.points.as_slice()
    }

    pub fn value_at(&self, x: f32) -> f32 {
        self.points.evaluate(x).unwrap_or(0.0)
    }
}

impl Default for PiecewiseFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl OpacityFunction for PiecewiseFunction {
    fn opacity_at(&self, value: f32) -> f32 {
        self.value_at(value)
    }

    fn range(&self) -> ValueRange {
        self.points.range()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ramp() {
        let mut pwf = PiecewiseFunction::new();
        pwf.add_point(0.0, 0.0).unwrap();
        pwf.add_point(255.0, 1.0).unwrap();
        pwf.add_point(1096.0, 0.0).unwrap();

        assert_eq!(pwf.range(), ValueRange::new(0.0, 1096.0));
        assert_eq!(pwf.opacity_at(0.0), 0.0);
        assert_eq!(pwf.opacity_at(255.0), 1.0);
        assert_eq!(pwf.opacity_at(1096.0), 0.0);
        assert!((pwf.opacity_at(127.5) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_is_transparent() {
        let pwf = PiecewiseFunction::new();
        assert_eq!(pwf.opacity_at(10.0), 0.0);
        assert_eq!(pwf.range(), ValueRange::new(0.0, 0.0));
    }

    #[test]
    fn single_point_is_constant() {
        let mut pwf = PiecewiseFunction::new();
        pwf.add_point(5.0, 0.25).unwrap();

        assert_eq!(pwf.opacity_at(-5.0), 0.25);
        assert_eq!(pwf.opacity_at(5.0), 0.25);
        assert_eq!(pwf.opacity_at(50.0), 0.25);
    }
}
