use nalgebra::{Point3, Vector3};

/// Axis aligned box, `lower` is the volume origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundBox {
    pub lower: Point3<f32>,
    pub upper: Point3<f32>,
}

impl BoundBox {
    pub fn from_position_dims(position: Point3<f32>, dimensions: Vector3<f32>) -> BoundBox {
        BoundBox {
            lower: position,
            upper: position + dimensions,
        }
    }

    pub fn dims(&self) -> Vector3<f32> {
        self.upper - self.lower
    }

    pub fn center(&self) -> Point3<f32> {
        self.lower + self.dims() * 0.5
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::{point, vector};

    #[test]
    fn center_and_dims() {
        let bbox = BoundBox::from_position_dims(point![1.0, 0.0, -2.0], vector![2.0, 4.0, 4.0]);

        assert_eq!(bbox.upper, point![3.0, 4.0, 2.0]);
        assert_eq!(bbox.dims(), vector![2.0, 4.0, 4.0]);
        assert_eq!(bbox.center(), point![2.0, 2.0, 0.0]);
    }
}
