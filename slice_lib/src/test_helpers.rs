//! Module with helper functions
//! Saves repetition in unit tests

use nalgebra::vector;

use crate::{
    transfer_functions::{ColorTransferFunction, PiecewiseFunction},
    volumetric::ScalarVolume,
};

/// Black at 0.0, white at 1.0
pub fn black_white() -> ColorTransferFunction {
    ColorTransferFunction::from_points(&[(0.0, 0.0, 0.0, 0.0), (1.0, 1.0, 1.0, 1.0)])
}

/// Opacity 0.0 at 0.0, 1.0 at 1.0
pub fn linear_opacity() -> PiecewiseFunction {
    PiecewiseFunction::from_points(&[(0.0, 0.0), (1.0, 1.0)])
}

/// 2x2x2 volume, samples <0;255>
pub fn white_volume() -> ScalarVolume {
    let data = vec![0, 32, 64, 64 + 32, 128, 128 + 32, 128 + 64, 255];
    let data = data.into_iter().map(|v| v as f32).collect();
    ScalarVolume::from_data(vector![2, 2, 2], data).unwrap()
}

/// 5x5x3 volume, sample is `x + 10y + 100z`
pub fn ramp_volume() -> ScalarVolume {
    ScalarVolume::from_fn(vector![5, 5, 3], |p| {
        (p.x + 10 * p.y + 100 * p.z) as f32
    })
}
