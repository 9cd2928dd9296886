use std::str::FromStr;

use clap::ArgMatches;
use nalgebra::{vector, Vector3};

/// Transform `Values` into `Vector`
fn values_to_vector3<T>(args: &ArgMatches, key: &str) -> Result<Vector3<T>, String>
where
    T: FromStr + Copy,
{
    let vals = args
        .values_of(key)
        .ok_or_else(|| format!("Missing {key}"))?
        .map(|v| v.parse::<T>().map_err(|_| format!("Cannot parse {key}")))
        .collect::<Result<Vec<T>, String>>()?;

    match vals[..] {
        [x, y, z] => Ok(vector![x, y, z]),
        _ => Err(format!("{key} needs 3 values")),
    }
}

fn optional_value<T: FromStr>(args: &ArgMatches, key: &str) -> Result<Option<T>, String> {
    args.value_of(key)
        .map(|v| v.parse::<T>().map_err(|_| format!("Cannot parse {key}")))
        .transpose()
}

fn value<T: FromStr>(args: &ArgMatches, key: &str) -> Result<T, String> {
    optional_value(args, key)?.ok_or_else(|| format!("Missing {key}"))
}

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug)]
pub struct Config {
    /// Dimensions of volume
    pub dims: Vector3<usize>,
    /// Type of generator to be used
    pub generator: GeneratorConfig,
    /// Optional seed for RNG, to replicate results
    pub seed: Option<u64>,
    /// Mask radius, `None` for default
    pub radius: Option<f32>,
    /// Slice position, `None` for volume center
    pub slice_z: Option<f32>,
    /// Lookup table size
    pub colors: usize,
}

impl Config {
    pub fn from_args(args: ArgMatches) -> Result<Config, String> {
        let dims = values_to_vector3(&args, "dims")?;
        let generator = GeneratorConfig::from_args(&args)?;
        let seed = optional_value(&args, "seed")?;
        let radius = optional_value(&args, "radius")?;
        let slice_z = optional_value(&args, "slice-z")?;
        let colors = value(&args, "colors")?;

        if colors < 2 {
            return Err(format!("Lookup table needs at least 2 colors, got {colors}"));
        }

        Ok(Config {
            dims,
            generator,
            seed,
            radius,
            slice_z,
            colors,
        })
    }
}

/// Settings specific to generator variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorConfig {
    /// Generate shapes
    Shapes { n_of_shapes: usize, sample: f32 },
    /// Random samples up to `sample`
    Noise { sample: f32 },
    /// Generate solid volume
    Solid { sample: f32 },
}

impl GeneratorConfig {
    pub fn from_args(args: &ArgMatches) -> Result<GeneratorConfig, String> {
        let name: String = value(args, "generator")?;
        let sample = value(args, "sample")?;

        match name.parse()? {
            GeneratorType::Shapes => {
                let n_of_shapes = value(args, "n-of-shapes")?;
                Ok(GeneratorConfig::Shapes {
                    n_of_shapes,
                    sample,
                })
            }
            GeneratorType::Noise => Ok(GeneratorConfig::Noise { sample }),
            GeneratorType::Solid => Ok(GeneratorConfig::Solid { sample }),
        }
    }
}

#[derive(Debug)]
pub enum GeneratorType {
    Shapes,
    Noise,
    Solid,
}

impl FromStr for GeneratorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shapes" => Ok(GeneratorType::Shapes),
            "noise" => Ok(GeneratorType::Noise),
            "solid" => Ok(GeneratorType::Solid),
            _ => Err(format!("Unknown generator '{s}'")),
        }
    }
}
