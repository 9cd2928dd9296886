use nalgebra::{vector, Vector3};

use super::SampleGenerator;

/// Generate solid volume
/// All sample values are the same, except for an empty border
pub struct SolidGenerator {
    /// The sample value
    sample: f32,
    pad: usize,
    dims: Vector3<usize>,
}

impl SolidGenerator {
    pub fn new(dims: Vector3<usize>, sample: f32) -> SolidGenerator {
        SolidGenerator {
            sample,
            pad: 5,
            dims,
        }
    }
}

impl SampleGenerator for SolidGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> f32 {
        let pad_end = self.dims.map(|d| d.saturating_sub(self.pad));
        if coords.x < self.pad
            || coords.y < self.pad
            || coords.z < self.pad
            || coords.x >= pad_end.x
            || coords.y >= pad_end.y
            || coords.z >= pad_end.z
        {
            0.0
        } else {
            self.sample
        }
    }
}
