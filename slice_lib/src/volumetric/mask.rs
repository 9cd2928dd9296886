use log::debug;
use nalgebra::{point, Point2, Point3, Vector3};

use super::ScalarVolume;

/// Margin between the default mask cylinder and the volume side
const MASK_MARGIN: f32 = 5.0;

/// Infinite cylinder with axis parallel to Z.
/// Implicit function: negative inside, zero on the surface, positive outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub center: Point2<f32>,
    pub radius: f32,
}

impl Cylinder {
    pub fn new(center: Point2<f32>, radius: f32) -> Cylinder {
        Cylinder { center, radius }
    }

    /// Cylinder around the volume axis, in index coordinates
    pub fn centered(size: Vector3<usize>, radius: f32) -> Cylinder {
        let center = point![
            size.x.saturating_sub(1) as f32 / 2.0,
            size.y.saturating_sub(1) as f32 / 2.0
        ];
        Cylinder { center, radius }
    }

    pub fn evaluate(&self, pos: Point3<f32>) -> f32 {
        let dx = pos.x - self.center.x;
        let dy = pos.y - self.center.y;
        dx * dx + dy * dy - self.radius * self.radius
    }

    /// Surface counts as inside
    pub fn contains(&self, pos: Point3<f32>) -> bool {
        self.evaluate(pos) <= 0.0
    }
}

/// Half of the volume width, minus a margin.
/// Zero for volumes narrower than twice the margin.
pub fn default_mask_radius(size: Vector3<usize>) -> f32 {
    (size.x as f32 / 2.0 - MASK_MARGIN).max(0.0)
}

/// Binary mask, 1.0 for voxels inside `cylinder`, 0.0 outside.
/// Voxels are tested at their index coordinates.
pub fn cylinder_mask(size: Vector3<usize>, cylinder: &Cylinder) -> ScalarVolume {
    let mask = ScalarVolume::from_fn(size, |p| {
        if cylinder.contains(p.map(|v| v as f32)) {
            1.0
        } else {
            0.0
        }
    });

    debug!(
        "Cylinder mask {size:?}, radius {}, {} voxels inside",
        cylinder.radius,
        mask.data().iter().filter(|&&v| v > 0.0).count()
    );

    mask
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn implicit_function_sign() {
        let cylinder = Cylinder::new(point![0.0, 0.0], 2.0);

        assert!(cylinder.evaluate(point![0.0, 0.0, 100.0]) < 0.0);
        assert_eq!(cylinder.evaluate(point![2.0, 0.0, -3.0]), 0.0);
        assert!(cylinder.evaluate(point![2.0, 2.0, 0.0]) > 0.0);

        assert!(cylinder.contains(point![0.0, 2.0, 0.0]));
        assert!(!cylinder.contains(point![0.0, 2.1, 0.0]));
    }

    #[test]
    fn centered_on_volume_axis() {
        let cylinder = Cylinder::centered(vector![11, 21, 4], 3.0);
        assert_eq!(cylinder.center, point![5.0, 10.0]);
    }

    #[test]
    fn mask_is_binary_and_constant_along_z() {
        let size = vector![9, 9, 3];
        let mask = cylinder_mask(size, &Cylinder::centered(size, 2.0));

        assert!(mask.data().iter().all(|&v| v == 0.0 || v == 1.0));

        for z in 0..size.z {
            assert_eq!(mask.get_data(4, 4, z), Some(1.0));
            assert_eq!(mask.get_data(6, 4, z), Some(1.0));
            assert_eq!(mask.get_data(7, 4, z), Some(0.0));
            assert_eq!(mask.get_data(0, 0, z), Some(0.0));
        }
    }

    #[test]
    fn default_radius() {
        assert_eq!(default_mask_radius(vector![64, 10, 10]), 27.0);
        assert_eq!(default_mask_radius(vector![10, 10, 10]), 0.0);
    }

    #[test]
    fn narrow_volume_default_radius() {
        // radius would be -3 without the clamp, masking a 3 voxel disc
        let size = vector![4, 4, 2];
        let radius = default_mask_radius(size);
        assert_eq!(radius, 0.0);

        let mask = cylinder_mask(size, &Cylinder::centered(size, radius));
        assert!(mask.data().iter().all(|&v| v == 0.0));
    }
}
