use std::ops::RangeBounds;

use nalgebra::{vector, Vector3};

use super::SampleGenerator;

/// Generate volume with a number of randomly placed shapes
pub struct ShapesGenerator {
    shapes: Vec<ShapeInfo>,
    background: f32,
}

impl ShapesGenerator {
    pub fn new(
        dims: Vector3<usize>,
        n_of_shapes: usize,
        sample: f32,
        seed: Option<u64>,
    ) -> ShapesGenerator {
        // Objects take about a quarter of the smallest side
        let side = (dims.x.min(dims.y).min(dims.z) / 4).max(1);
        let variance = side / 2;

        let random_shape_gen = ShapeInfoGenerator::new(
            dims,
            vector![side, side, side],
            vector![variance, variance, variance],
            sample,
            seed,
        );
        let shapes = random_shape_gen.get_shapes(n_of_shapes);
        ShapesGenerator {
            shapes,
            background: sample * 0.35,
        }
    }
}

impl SampleGenerator for ShapesGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> f32 {
        for shape in &self.shapes {
            if coords.x >= shape.position_low.x
                && coords.y >= shape.position_low.y
                && coords.z >= shape.position_low.z
                && coords.x <= shape.position_high.x
                && coords.y <= shape.position_high.y
                && coords.z <= shape.position_high.z
            {
                let offset = coords - shape.position_low;
                if let Some(sample) = shape.render_at(offset) {
                    return sample;
                }
            }
        }
        self.background
    }
}

// # of enum ShapeType variants
const N_OF_SHAPE_KINDS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeType {
    Cuboid,
    Sphere,
}

/// One shape in volume
#[derive(Debug)]
pub struct ShapeInfo {
    pub position_low: Vector3<usize>,
    pub position_high: Vector3<usize>,
    pub shape_type: ShapeType,
    pub sample: f32,
}

impl ShapeInfo {
    /// `None` if the offset is in the bounding box but outside the shape
    fn render_at(&self, offset: Vector3<usize>) -> Option<f32> {
        match self.shape_type {
            ShapeType::Cuboid => Some(self.sample),
            ShapeType::Sphere => self.render_sphere(offset),
        }
    }

    fn render_sphere(&self, offset: Vector3<usize>) -> Option<f32> {
        let offset_f = offset.cast::<f32>();
        let pos_low_f = self.position_low.cast::<f32>();
        let pos_hi_f = self.position_high.cast::<f32>();

        let center = (pos_low_f + pos_hi_f) / 2.0 - pos_low_f;

        let r = (pos_hi_f.x - pos_low_f.x) / 2.0;
        let length = offset_f - center;

        if length.magnitude() <= r {
            Some(self.sample)
        } else {
            None
        }
    }
}

/// Generate shapes
/// Helper type
struct ShapeInfoGenerator {
    rng: fastrand::Rng,
    vol_dims: Vector3<usize>,
    size: Vector3<usize>,
    size_variance: Vector3<usize>,
    sample: f32,
}

impl ShapeInfoGenerator {
    fn new(
        vol_dims: Vector3<usize>,
        size: Vector3<usize>,
        size_variance: Vector3<usize>,
        sample: f32,
        seed: Option<u64>,
    ) -> Self {
        let rng = fastrand::Rng::new();
        if let Some(seed) = seed {
            rng.seed(seed);
        }

        Self {
            rng,
            vol_dims,
            size,
            size_variance,
            sample,
        }
    }

    fn random_shape(&self) -> ShapeType {
        match self.rng.u8(0..N_OF_SHAPE_KINDS) {
            0 => ShapeType::Cuboid,
            _ => ShapeType::Sphere,
        }
    }

    fn random_vector<R>(&self, ranges: Vector3<R>) -> Vector3<usize>
    where
        R: RangeBounds<usize> + Clone,
    {
        let rand_x = self.rng.usize(ranges[0].clone()); // Using index, .x access not working
        let rand_y = self.rng.usize(ranges[1].clone());
        let rand_z = self.rng.usize(ranges[2].clone());
        vector![rand_x, rand_y, rand_z]
    }

    fn get_shapes(&self, n: usize) -> Vec<ShapeInfo> {
        (0..n).map(|_| self.get_shape()).collect()
    }

    fn get_shape(&self) -> ShapeInfo {
        let shape_type = self.random_shape();

        let size_min = self.size.zip_map(&self.size_variance, |s, v| s.saturating_sub(v));
        let size_max = (self.size + self.size_variance).zip_map(&self.vol_dims, |s, d| s.min(d));
        let size_min = size_min.zip_map(&size_max, |lo, hi| lo.min(hi));

        let size_ranges = vector![
            size_min.x..=size_max.x,
            size_min.y..=size_max.y,
            size_min.z..=size_max.z
        ];
        let size = self.random_vector(size_ranges);

        // Spawn shape in positions it fits
        let free = self.vol_dims.zip_map(&size, |d, s| d.saturating_sub(s));
        let pos_ranges = vector![0..=free.x, 0..=free.y, 0..=free.z];
        let position_low = self.random_vector(pos_ranges);

        let position_high = position_low + size;

        // Density varies by up to 5 percent
        let sample = self.sample * (0.95 + self.rng.f32() * 0.1);

        ShapeInfo {
            position_low,
            position_high,
            shape_type,
            sample,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shapes_fit_volume() {
        let dims = vector![40, 30, 20];
        let gen = ShapeInfoGenerator::new(dims, vector![5, 5, 5], vector![2, 2, 2], 100.0, Some(1));

        for shape in gen.get_shapes(50) {
            assert!(shape.position_high.x <= dims.x);
            assert!(shape.position_high.y <= dims.y);
            assert!(shape.position_high.z <= dims.z);
            assert!((94.0..=106.0).contains(&shape.sample));
        }
    }

    #[test]
    fn seeded_generators_agree() {
        let a = ShapesGenerator::new(vector![32, 32, 32], 5, 1000.0, Some(42));
        let b = ShapesGenerator::new(vector![32, 32, 32], 5, 1000.0, Some(42));

        for x in (0..32).step_by(3) {
            for y in (0..32).step_by(3) {
                let p = vector![x, y, 16];
                assert_eq!(a.sample_at(p), b.sample_at(p));
            }
        }
    }

    #[test]
    fn sphere_corner_is_outside() {
        let shape = ShapeInfo {
            position_low: vector![0, 0, 0],
            position_high: vector![10, 10, 10],
            shape_type: ShapeType::Sphere,
            sample: 1.0,
        };

        assert_eq!(shape.render_at(vector![5, 5, 5]), Some(1.0));
        assert_eq!(shape.render_at(vector![0, 0, 0]), None);
    }
}
