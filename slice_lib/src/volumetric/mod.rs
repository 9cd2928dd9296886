//! # Volumes
//!
//! In-memory scalar volume, cylindrical masks and planar reslicing.

mod mask;
mod reslice;
mod scalar_volume;

pub use mask::{cylinder_mask, default_mask_radius, Cylinder};
pub use reslice::Reslice;
pub use scalar_volume::ScalarVolume;

use crate::{error::Result, image::ScalarImage};

/// Slice `volume` and zero every pixel outside of `mask`.
/// `mask` must have the same size as `volume`.
pub fn masked_slice(
    volume: &ScalarVolume,
    mask: &ScalarVolume,
    reslice: &Reslice,
) -> Result<ScalarImage> {
    let slice = reslice.apply(volume);
    let mask_slice = reslice.apply(mask);
    slice.apply_mask(&mask_slice)
}
