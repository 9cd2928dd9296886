use std::ops::{Deref, Range};

/// Represents a range of floating-point values.
/// Domain of transfer functions and lookup tables.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ValueRange {
    /// Lower bound
    pub low: f32,
    /// Upper bound
    pub high: f32,
}

impl ValueRange {
    pub fn new(low: f32, high: f32) -> ValueRange {
        ValueRange { low, high }
    }

    /// Constructs new, empty range.
    pub fn empty() -> ValueRange {
        ValueRange {
            low: f32::NAN,
            high: f32::NAN,
        }
    }

    /// Constructs minimal range, where all samples from an iterator
    /// are inside the range.
    pub fn from_samples<T, I>(iter: impl IntoIterator<Item = T>) -> ValueRange
    where
        T: Deref<Target = I>,
        I: Into<f32> + Copy,
    {
        let mut range = ValueRange::empty();
        for val in iter {
            range.extend((*val).into());
        }
        range
    }

    /// True if no value was ever added.
    pub fn is_empty(&self) -> bool {
        self.low.is_nan() || self.high.is_nan()
    }

    /// `high - low`, zero for empty range.
    pub fn width(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.high - self.low
        }
    }

    /// Extend the range with new value.
    /// NaN values are ignored.
    pub fn extend(&mut self, val: f32) {
        if val.is_nan() {
            return;
        }

        if self.is_empty() {
            self.low = val;
            self.high = val;
        }

        if val > self.high {
            self.high = val;
        }

        if val < self.low {
            self.low = val;
        }
    }

    /// Closest value inside the range.
    pub fn clamp(&self, val: f32) -> f32 {
        if val < self.low {
            self.low
        } else if val > self.high {
            self.high
        } else {
            val
        }
    }

    /// Value at parameter `t`, `t = 0` is `low` and `t = 1` is `high`.
    pub fn lerp(&self, t: f32) -> f32 {
        self.low + t * (self.high - self.low)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::empty()
    }
}

/// Conversion from standard library type.
/// Unlocks simple syntax:
/// ```
/// # use slice_lib::common::ValueRange;
/// let range: ValueRange = (0.0..45.5).into();
/// ```
impl From<Range<f32>> for ValueRange {
    fn from(range: Range<f32>) -> Self {
        ValueRange {
            low: range.start,
            high: range.end,
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn value_range() {
        let values = [0.0, 5.0, 3.0, -2.5];

        let mut range = ValueRange::new(1.0, 1.0);
        assert_eq!(range.width(), 0.0);

        for val in values {
            range.extend(val);
        }

        assert_eq!(range.low, -2.5);
        assert_eq!(range.high, 5.0);
        assert_eq!(range.width(), 7.5);
    }

    #[test]
    fn empty_value_range() {
        let mut range = ValueRange::empty();

        assert!(range.is_empty());
        assert_eq!(range.width(), 0.0);

        range.extend(f32::NAN);
        assert!(range.is_empty());

        range.extend(2.0);

        assert!(!range.is_empty());
        assert_eq!(range.low, 2.0);
        assert_eq!(range.high, 2.0);
    }

    #[test]
    fn range_of_samples() {
        let range = ValueRange::from_samples(&[3u8, 8, 1, 6]);
        assert_eq!(range, ValueRange::new(1.0, 8.0));

        let none: [u8; 0] = [];
        assert!(ValueRange::from_samples(&none).is_empty());
    }

    #[test]
    fn clamp_and_lerp() {
        let range: ValueRange = (-1.0..3.0).into();

        assert_eq!(range.clamp(-5.0), -1.0);
        assert_eq!(range.clamp(7.0), 3.0);
        assert_eq!(range.clamp(0.5), 0.5);

        assert_eq!(range.lerp(0.0), -1.0);
        assert_eq!(range.lerp(0.5), 1.0);
        assert_eq!(range.lerp(1.0), 3.0);
    }
}
