use log::debug;
use nalgebra::{vector, Matrix3, Point3, Vector2, Vector3};

use crate::{
    error::{Error, Result},
    image::ScalarImage,
};

use super::ScalarVolume;

/// Extracts a planar slice from a volume.
///
/// The plane goes through `origin` (world coordinates), the first two columns
/// of `axes` span it. Output pixel `(i, j)` samples
/// `origin + axes[0] * (i - (w - 1) / 2) * spacing.x + axes[1] * (j - (h - 1) / 2) * spacing.y`,
/// so `origin` is in the middle of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Reslice {
    origin: Point3<f32>,
    axes: Matrix3<f32>,
    size: Vector2<usize>,
    spacing: Vector2<f32>,
}

impl Reslice {
    /// Axes are direction cosines, columns get normalized.
    /// Fails if the first two columns are zero or parallel.
    pub fn new(origin: Point3<f32>, axes: Matrix3<f32>, size: Vector2<usize>) -> Result<Reslice> {
        let u = axes.column(0).into_owned();
        let v = axes.column(1).into_owned();
        if u.cross(&v).norm() <= f32::EPSILON {
            return Err(Error::DegenerateAxes);
        }

        let w = axes.column(2).into_owned();
        let w = if w.norm() > f32::EPSILON {
            w.normalize()
        } else {
            u.cross(&v).normalize()
        };

        let axes = Matrix3::from_columns(&[u.normalize(), v.normalize(), w]);

        Ok(Reslice {
            origin,
            axes,
            size,
            spacing: vector![1.0, 1.0],
        })
    }

    /// Plane of constant world `z` through the volume center,
    /// pixels aligned with voxels
    pub fn axial(volume: &ScalarVolume, z: f32) -> Reslice {
        let center = volume.center();
        let size = volume.size();
        let spacing = volume.spacing();
        Reslice {
            origin: Point3::new(center.x, center.y, z),
            axes: Matrix3::identity(),
            size: vector![size.x, size.y],
            spacing: vector![spacing.x, spacing.y],
        }
    }

    /// Distance between output pixels in world units
    pub fn with_spacing(mut self, spacing: Vector2<f32>) -> Reslice {
        self.spacing = spacing;
        self
    }

    pub fn origin(&self) -> Point3<f32> {
        self.origin
    }

    pub fn axes(&self) -> &Matrix3<f32> {
        &self.axes
    }

    pub fn size(&self) -> Vector2<usize> {
        self.size
    }

    /// Normal of the slice plane
    pub fn normal(&self) -> Vector3<f32> {
        self.axes.column(2).into_owned()
    }

    /// World position of output pixel
    pub fn pixel_position(&self, i: usize, j: usize) -> Point3<f32> {
        let u = self.axes.column(0).into_owned();
        let v = self.axes.column(1).into_owned();
        let half = self.size.map(|s| s.saturating_sub(1) as f32 / 2.0);

        let du = (i as f32 - half.x) * self.spacing.x;
        let dv = (j as f32 - half.y) * self.spacing.y;

        self.origin + u * du + v * dv
    }

    /// Trilinear samples of `volume`, zero outside of it
    pub fn apply(&self, volume: &ScalarVolume) -> ScalarImage {
        let mut image = ScalarImage::new(self.size);
        for j in 0..self.size.y {
            for i in 0..self.size.x {
                let pos = self.pixel_position(i, j);
                image.set(i, j, volume.sample_world(pos));
            }
        }

        debug!(
            "Resliced {}x{} image at {:?}",
            self.size.x, self.size.y, self.origin
        );

        image
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::ramp_volume;
    use nalgebra::point;

    #[test]
    fn axial_hits_voxels() {
        let vol = ramp_volume();
        let size = vol.size();

        for z in 0..size.z {
            let slice = Reslice::axial(&vol, z as f32).apply(&vol);
            assert_eq!(slice.size(), vector![size.x, size.y]);

            for x in 0..size.x {
                for y in 0..size.y {
                    assert_eq!(slice.get(x, y), vol.get_data(x, y, z));
                }
            }
        }
    }

    #[test]
    fn between_planes_interpolates() {
        let vol = ramp_volume();
        let slice = Reslice::axial(&vol, 0.5).apply(&vol);

        // ramp grows by 100 per z step
        let expected = (vol.get_data(1, 2, 0).unwrap() + vol.get_data(1, 2, 1).unwrap()) / 2.0;
        assert!((slice.get(1, 2).unwrap() - expected).abs() < 1e-3);
    }

    #[test]
    fn outside_volume_is_zero() {
        let vol = ramp_volume();
        let slice = Reslice::axial(&vol, 50.0).apply(&vol);

        assert!(slice.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn flipped_normal() {
        // direction cosines with mirrored z, same plane as axial
        let vol = ramp_volume();
        let axes = Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0);
        let center = vol.center();
        let size = vol.size();

        let reslice = Reslice::new(point![center.x, center.y, 1.0], axes, vector![size.x, size.y])
            .unwrap();
        assert_eq!(reslice.normal(), vector![0.0, 0.0, -1.0]);

        let slice = reslice.apply(&vol);
        let axial = Reslice::axial(&vol, 1.0).apply(&vol);
        assert_eq!(slice, axial);
    }

    #[test]
    fn degenerate_axes_rejected() {
        let parallel = Matrix3::new(1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(
            Reslice::new(point![0.0, 0.0, 0.0], parallel, vector![4, 4]),
            Err(Error::DegenerateAxes)
        );

        let zero = Matrix3::zeros();
        assert!(Reslice::new(point![0.0, 0.0, 0.0], zero, vector![4, 4]).is_err());
    }

    #[test]
    fn axes_normalized() {
        let axes = Matrix3::new(2.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0);
        let reslice = Reslice::new(point![0.0, 0.0, 0.0], axes, vector![2, 2]).unwrap();

        assert_eq!(reslice.axes(), &Matrix3::identity());
    }

    #[test]
    fn pixel_positions_centered() {
        let reslice = Reslice::new(point![1.0, 2.0, 3.0], Matrix3::identity(), vector![3, 5])
            .unwrap()
            .with_spacing(vector![0.5, 2.0]);

        assert_eq!(reslice.pixel_position(1, 2), point![1.0, 2.0, 3.0]);
        assert_eq!(reslice.pixel_position(0, 0), point![0.5, -2.0, 3.0]);
        assert_eq!(reslice.pixel_position(2, 4), point![1.5, 6.0, 3.0]);
    }
}
