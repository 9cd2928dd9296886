use log::info;
use nalgebra::Vector3;
use slice_lib::volumetric::ScalarVolume;

use crate::config::{Config, GeneratorConfig};

mod noise;
mod shapes;
mod solid;

pub use noise::NoiseGenerator;
pub use shapes::ShapesGenerator;
pub use solid::SolidGenerator;

// Generates one sample at a time, at any location
pub trait SampleGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> f32;
}

pub fn get_sample_generator(config: &Config) -> Box<dyn SampleGenerator> {
    match config.generator {
        GeneratorConfig::Shapes {
            n_of_shapes,
            sample,
        } => Box::new(ShapesGenerator::new(
            config.dims,
            n_of_shapes,
            sample,
            config.seed,
        )),
        GeneratorConfig::Noise { sample } => {
            Box::new(NoiseGenerator::new(config.dims, sample, config.seed))
        }
        GeneratorConfig::Solid { sample } => Box::new(SolidGenerator::new(config.dims, sample)),
    }
}

/// Sample the configured generator into an in-memory volume
pub fn generate_vol(config: &Config) -> ScalarVolume {
    let gen = get_sample_generator(config);
    let volume = ScalarVolume::from_fn(config.dims, |p| gen.sample_at(p.coords));

    info!("Generated volume {:?}", volume);

    volume
}
