/*
    slice_lib
    Colors used by transfer functions and lookup tables.
    All channels are in range <0;1>.
*/

use nalgebra::{vector, Vector3, Vector4};

pub type RGBA = Vector4<f32>;
pub type RGB = Vector3<f32>;

pub fn new(r: f32, g: f32, b: f32, a: f32) -> RGBA {
    vector![r, g, b, a]
}

pub fn rgb(r: f32, g: f32, b: f32) -> RGB {
    vector![r, g, b]
}

pub fn zero() -> RGBA {
    vector![0.0, 0.0, 0.0, 0.0]
}

/// Attach opacity to a color.
pub fn with_opacity(color: RGB, opacity: f32) -> RGBA {
    vector![color.x, color.y, color.z, opacity]
}

/// Convert to 8 bit channels, out of range channels are clamped.
pub fn to_bytes(color: RGBA) -> [u8; 4] {
    let c = color.map(|ch| (ch.clamp(0.0, 1.0) * 255.0).round() as u8);
    [c.x, c.y, c.z, c.w]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bytes_clamp() {
        assert_eq!(to_bytes(new(0.0, 1.0, 0.5, 2.0)), [0, 255, 128, 255]);
        assert_eq!(to_bytes(new(-1.0, 0.2, 0.0, 0.0)), [0, 51, 0, 0]);
    }

    #[test]
    fn opacity_attached() {
        let c = with_opacity(rgb(0.1, 0.2, 0.3), 0.4);
        assert_eq!(c, new(0.1, 0.2, 0.3, 0.4));
    }
}
