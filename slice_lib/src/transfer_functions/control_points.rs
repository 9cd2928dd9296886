use std::ops::{Add, Mul, Sub};

use log::warn;

use crate::{
    common::ValueRange,
    error::{Error, Result},
};

/// One control point of a piecewise linear function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint<T> {
    pub x: f32,
    pub value: T,
}

/// Control points ordered by `x`.
/// Points with equal `x` keep insertion order, which makes a step.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ControlPoints<T> {
    points: Vec<ControlPoint<T>>,
}

impl<T> ControlPoints<T>
where
    T: Copy + Mul<f32, Output = T> + Add<Output = T> + Sub<Output = T>,
{
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn add(&mut self, x: f32, value: T) -> Result<usize> {
        if x.is_nan() {
            return Err(Error::InvalidControlPoint(x));
        }
        let index = self.points.partition_point(|p| p.x <= x);
        self.points.insert(index, ControlPoint { x, value });
        Ok(index)
    }

    /// Bulk insert, NaN positions are skipped
    pub fn from_points(points: impl IntoIterator<Item = (f32, T)>) -> Self {
        let mut result = Self::new();
        for (x, value) in points {
            if result.add(x, value).is_err() {
                warn!("Skipped control point with NaN position");
            }
        }
        result
    }

    /// Removes first point at `x`
    pub fn remove(&mut self, x: f32) -> bool {
        match self.points.iter().position(|p| p.x == x) {
            Some(index) => {
                self.points.remove(index);
                true
            }
            None => false,
        }
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

    pub fn as_slice(&self) -> &[ControlPoint<T>] {
        &self.points
    }

    /// `[first.x, last.x]`, `[0, 0]` without points
    pub fn range(&self) -> ValueRange {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => ValueRange::new(first.x, last.x),
            _ => ValueRange::new(0.0, 0.0),
        }
    }

    /// Linear interpolation, clamped outside of range.
    /// `None` without points.
    pub fn evaluate(&self, x: f32) -> Option<T> {
        let first = self.points.first()?;
        let last = self.points.last()?;

        let upper = self.points.partition_point(|p| p.x <= x);
        if upper == 0 {
            return Some(first.value);
        }
        if upper == self.points.len() {
            return Some(last.value);
        }

        // lower.x <= x < upper.x, so the segment has nonzero width
        let lo = &self.points[upper - 1];
        let hi = &self.points[upper];
        let t = (x - lo.x) / (hi.x - lo.x);

        Some(lo.value + (hi.value - lo.value) * t)
    }
}
