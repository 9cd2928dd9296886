pub use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub use nalgebra::vector;
pub use slice_lib::{
    image::{ImageMapToRgba, ScalarImage},
    premade::transfer_functions::{ct_color, ct_opacity},
    volumetric::{Reslice, ScalarVolume},
    LookupTableBuilder,
};

pub const WIDTH: usize = 512;
pub const HEIGHT: usize = 512;

pub fn get_image() -> ScalarImage {
    let data = (0..WIDTH * HEIGHT).map(|i| (i % 4459) as f32).collect();
    ScalarImage::from_data(vector![WIDTH, HEIGHT], data).unwrap()
}

pub fn get_volume() -> ScalarVolume {
    ScalarVolume::from_fn(vector![128, 128, 128], |p| (p.x * p.y + p.z) as f32)
}
