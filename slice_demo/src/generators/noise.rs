use nalgebra::Vector3;

use super::SampleGenerator;

/// Uniform random samples in range <0;sample)
/// Samples are precomputed, so repeated queries agree
pub struct NoiseGenerator {
    dims: Vector3<usize>,
    samples: Vec<f32>,
}

impl NoiseGenerator {
    pub fn new(dims: Vector3<usize>, sample: f32, seed: Option<u64>) -> NoiseGenerator {
        let rng = fastrand::Rng::new();
        if let Some(seed) = seed {
            rng.seed(seed);
        }

        let samples = (0..dims.x * dims.y * dims.z)
            .map(|_| rng.f32() * sample)
            .collect();

        NoiseGenerator { dims, samples }
    }
}

impl SampleGenerator for NoiseGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> f32 {
        let index = coords.z + coords.y * self.dims.z + coords.x * self.dims.y * self.dims.z;
        self.samples.get(index).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn seeded_noise_repeats() {
        let a = NoiseGenerator::new(vector![4, 4, 4], 10.0, Some(3));
        let b = NoiseGenerator::new(vector![4, 4, 4], 10.0, Some(3));

        assert_eq!(a.samples, b.samples);
        assert!(a.samples.iter().all(|&s| (0.0..10.0).contains(&s)));
        assert_eq!(a.sample_at(vector![9, 0, 0]), 0.0);
    }
}
