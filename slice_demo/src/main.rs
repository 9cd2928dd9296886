use std::{process::ExitCode, sync::Arc};

use crate::config::Config;
use log::info;
use slice_lib::{
    image::{ImageMapToRgba, RgbaImage},
    premade::transfer_functions::{ct_color, slice_opacity},
    transfer_functions::ColorFunction,
    volumetric::{cylinder_mask, default_mask_radius, masked_slice, Cylinder, Reslice},
};

mod args;
mod config;
mod generators;

use crate::{args::get_command, generators::generate_vol};

fn run(cfg: &Config) -> slice_lib::Result<RgbaImage> {
    let volume = generate_vol(cfg);
    let size = volume.size();

    let radius = cfg.radius.unwrap_or_else(|| default_mask_radius(size));
    let mask = cylinder_mask(size, &Cylinder::centered(size, radius));

    let slice_z = cfg.slice_z.unwrap_or_else(|| volume.center().z);
    let reslice = Reslice::axial(&volume, slice_z);
    let slice = masked_slice(&volume, &mask, &reslice)?;

    let range = slice.value_range();
    info!("Slice at z = {slice_z}, values <{};{}>", range.low, range.high);

    // Volume and slice share one color function
    let ctf: Arc<dyn ColorFunction> = Arc::new(ct_color());

    let mut mapper = ImageMapToRgba::new();
    mapper.set_number_of_colors(cfg.colors)?;
    mapper.set_color_function(Some(ctf));
    mapper.set_opacity_function(Some(Arc::new(slice_opacity())));

    Ok(mapper.map(&slice))
}

fn print_summary(image: &RgbaImage) {
    let size = image.size();
    let pixels = image.data();

    let opaque = pixels.iter().filter(|c| c.w > 0.0).count();
    let coverage = if pixels.is_empty() {
        0.0
    } else {
        opaque as f32 / pixels.len() as f32 * 100.0
    };

    println!("Slice {}x{}", size.x, size.y);
    println!("Visible pixels: {opaque} ({coverage:.1} %)");

    if opaque > 0 {
        let sum = pixels
            .iter()
            .filter(|c| c.w > 0.0)
            .fold(nalgebra::Vector3::<f32>::zeros(), |acc, c| acc + c.xyz());
        let mean = sum / opaque as f32;
        println!(
            "Mean visible color: [{:.3}, {:.3}, {:.3}]",
            mean.x, mean.y, mean.z
        );
    }
}

pub fn main() -> ExitCode {
    env_logger::init();

    let args = get_command().get_matches();

    let cfg = match Config::from_args(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("{:?}", cfg);

    match run(&cfg) {
        Ok(image) => {
            print_summary(&image);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
