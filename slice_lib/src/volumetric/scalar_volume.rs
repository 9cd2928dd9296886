use nalgebra::{point, vector, Point3, Vector3};

use crate::{
    common::{BoundBox, ValueRange},
    error::{Error, Result},
};

/// Volume of scalar samples stored linearly, `z` changes fastest.
///
/// Sampling works in index space, `origin` and `spacing` place the volume in
/// world coordinates.
#[derive(Clone, PartialEq)]
pub struct ScalarVolume {
    size: Vector3<usize>,
    spacing: Vector3<f32>,
    origin: Point3<f32>,
    data: Vec<f32>,
}

impl std::fmt::Debug for ScalarVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarVolume")
            .field("size", &self.size)
            .field("spacing", &self.spacing)
            .field("origin", &self.origin)
            .field("data len", &self.data.len())
            .finish()
    }
}

impl ScalarVolume {
    /// Volume of zeros, unit spacing, origin at zero
    pub fn new(size: Vector3<usize>) -> ScalarVolume {
        ScalarVolume::with_data(size, vec![0.0; size.x * size.y * size.z])
    }

    pub fn from_data(size: Vector3<usize>, data: Vec<f32>) -> Result<ScalarVolume> {
        let expected = size.x * size.y * size.z;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(ScalarVolume::with_data(size, data))
    }

    /// Fill volume by evaluating `f` at every voxel
    pub fn from_fn<F>(size: Vector3<usize>, f: F) -> ScalarVolume
    where
        F: Fn(Point3<usize>) -> f32,
    {
        let mut data = Vec::with_capacity(size.x * size.y * size.z);
        for x in 0..size.x {
            for y in 0..size.y {
                for z in 0..size.z {
                    data.push(f(point![x, y, z]));
                }
            }
        }
        ScalarVolume::with_data(size, data)
    }

    fn with_data(size: Vector3<usize>, data: Vec<f32>) -> ScalarVolume {
        ScalarVolume {
            size,
            spacing: vector![1.0, 1.0, 1.0],
            origin: point![0.0, 0.0, 0.0],
            data,
        }
    }

    /// Shape of voxels
    pub fn with_spacing(mut self, spacing: Vector3<f32>) -> ScalarVolume {
        self.spacing = spacing;
        self
    }

    pub fn with_origin(mut self, origin: Point3<f32>) -> ScalarVolume {
        self.origin = origin;
        self
    }

    fn get_3d_index(&self, x: usize, y: usize, z: usize) -> usize {
        z + y * self.size.z + x * self.size.y * self.size.z
    }

    pub fn size(&self) -> Vector3<usize> {
        self.size
    }

    pub fn spacing(&self) -> Vector3<f32> {
        self.spacing
    }

    pub fn origin(&self) -> Point3<f32> {
        self.origin
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn get_data(&self, x: usize, y: usize, z: usize) -> Option<f32> {
        if x >= self.size.x || y >= self.size.y || z >= self.size.z {
            return None;
        }
        self.data.get(self.get_3d_index(x, y, z)).copied()
    }

    /// World coordinates of the first and last voxel
    pub fn bound_box(&self) -> BoundBox {
        let dims = self
            .size
            .map(|v| v.saturating_sub(1) as f32)
            .component_mul(&self.spacing);
        BoundBox::from_position_dims(self.origin, dims)
    }

    pub fn center(&self) -> Point3<f32> {
        self.bound_box().center()
    }

    pub fn value_range(&self) -> ValueRange {
        ValueRange::from_samples(self.data.iter())
    }

    /// World coordinates to index space
    pub fn world_to_index(&self, pos: Point3<f32>) -> Point3<f32> {
        let local = (pos - self.origin).component_div(&self.spacing);
        Point3::from(local)
    }

    /// Trilinear interpolation sample, zero if outside.
    /// `pos` in index coordinates
    pub fn sample_at(&self, pos: Point3<f32>) -> f32 {
        let max = self.size.map(|v| v as f32 - 1.0);
        let inside = pos.x >= 0.0
            && pos.y >= 0.0
            && pos.z >= 0.0
            && pos.x <= max.x
            && pos.y <= max.y
            && pos.z <= max.z;
        if !inside {
            // NaN lands here too
            return 0.0;
        }

        let low = pos.map(|v| v.floor() as usize);
        let t = pos - low.map(|v| v as f32);

        let x1 = (low.x + 1).min(self.size.x - 1);
        let y1 = (low.y + 1).min(self.size.y - 1);
        let z1 = (low.z + 1).min(self.size.z - 1);

        let c = |x, y, z| self.data[self.get_3d_index(x, y, z)];
        let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;

        // x lines
        let c00 = lerp(c(low.x, low.y, low.z), c(x1, low.y, low.z), t.x);
        let c10 = lerp(c(low.x, y1, low.z), c(x1, y1, low.z), t.x);
        let c01 = lerp(c(low.x, low.y, z1), c(x1, low.y, z1), t.x);
        let c11 = lerp(c(low.x, y1, z1), c(x1, y1, z1), t.x);

        // y plane
        let c0 = lerp(c00, c10, t.y);
        let c1 = lerp(c01, c11, t.y);

        lerp(c0, c1, t.z)
    }

    /// Trilinear sample at world position
    pub fn sample_world(&self, pos: Point3<f32>) -> f32 {
        self.sample_at(self.world_to_index(pos))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::{ramp_volume, white_volume};

    #[test]
    fn from_data_checks_length() {
        assert!(ScalarVolume::from_data(vector![2, 2, 2], vec![0.0; 8]).is_ok());
        assert_eq!(
            ScalarVolume::from_data(vector![2, 2, 2], vec![0.0; 7]),
            Err(Error::DataLength {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn z_is_fastest() {
        let vol = white_volume();

        assert_eq!(vol.get_data(0, 0, 1), Some(32.0));
        assert_eq!(vol.get_data(0, 1, 0), Some(64.0));
        assert_eq!(vol.get_data(1, 0, 0), Some(128.0));
        assert_eq!(vol.get_data(1, 1, 1), Some(255.0));
        assert_eq!(vol.get_data(2, 0, 0), None);
    }

    #[test]
    fn samples_match_voxels() {
        let vol = ramp_volume();
        let size = vol.size();

        for x in 0..size.x {
            for y in 0..size.y {
                for z in 0..size.z {
                    let pos = point![x as f32, y as f32, z as f32];
                    assert_eq!(vol.sample_at(pos), vol.get_data(x, y, z).unwrap());
                }
            }
        }
    }

    #[test]
    fn interpolates_between_voxels() {
        let vol = white_volume();

        // center of the cube is the mean of all corners
        let center = vol.sample_at(point![0.5, 0.5, 0.5]);
        let mean = vol.data().iter().sum::<f32>() / 8.0;
        assert!((center - mean).abs() < 1e-4);

        assert_eq!(vol.sample_at(point![0.0, 0.0, 0.5]), 16.0);
    }

    #[test]
    fn outside_is_zero() {
        let vol = white_volume();

        assert_eq!(vol.sample_at(point![-0.1, 0.0, 0.0]), 0.0);
        assert_eq!(vol.sample_at(point![0.0, 1.1, 0.0]), 0.0);
        assert_eq!(vol.sample_at(point![f32::NAN, 0.0, 0.0]), 0.0);
        assert_eq!(ScalarVolume::new(vector![0, 0, 0]).sample_at(point![0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn world_placement() {
        let vol = white_volume()
            .with_spacing(vector![2.0, 2.0, 4.0])
            .with_origin(point![10.0, 0.0, 0.0]);

        assert_eq!(vol.center(), point![11.0, 1.0, 2.0]);
        assert_eq!(vol.world_to_index(point![12.0, 2.0, 4.0]), point![1.0, 1.0, 1.0]);
        assert_eq!(vol.sample_world(point![12.0, 2.0, 4.0]), 255.0);
        assert_eq!(vol.value_range(), ValueRange::new(0.0, 255.0));
    }
}
