use std::ops::Neg;

use float_cmp::{ApproxEq, F64Margin};

use super::*;

/// three component vector, composed of its xy projection and z
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector3D {
    planar: Vector2D,
    z: f64,
}

impl Vector3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D {
            planar: Vector2D::new(x, y),
            z,
        }
    }

    pub fn x(&self) -> f64 {
        self.planar.x()
    }

    pub fn y(&self) -> f64 {
        self.planar.y()
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// projection onto the xy plane
    pub fn planar(&self) -> Vector2D {
        self.planar
    }

    /// cross product `self x other`, components rounded to 2 decimals
    pub fn cross_multiplication(&self, other: &dyn Vector) -> Result<Vector3D, VectorError> {
        let [x_2, y_2, z_2] = components_of::<3>(other)?;
        let (x, y, z) = (self.x(), self.y(), self.z);

        let x_product = y * z_2 - z * y_2;
        let y_product = z * x_2 - x * z_2;
        let z_product = x * y_2 - y * x_2;

        Ok(Vector3D::new(
            round2(x_product),
            round2(y_product),
            round2(z_product),
        ))
    }
}

impl Vector for Vector3D {
    fn dimension(&self) -> usize {
        3
    }

    fn components(&self) -> Vec<f64> {
        let mut components = self.planar.components();
        components.push(self.z);
        components
    }

    fn abs(&self) -> f64 {
        round2((self.x().powi(2) + self.y().powi(2) + self.z.powi(2)).sqrt())
    }

    fn cdot(&self, other: &dyn Vector) -> Result<f64, VectorError> {
        let [x_2, y_2, z_2] = components_of::<3>(other)?;
        Ok(round2(self.x() * x_2 + self.y() * y_2 + self.z * z_2))
    }

    /// `fi` is the azimuth `atan(y / x)`, `psi` the inclination `atan(sqrt(x^2 + y^2) / z)`
    fn angle(&self) -> Result<Angle, VectorError> {
        let (x, y, z) = (self.x(), self.y(), self.z);
        if x == 0.0 {
            return Err(domain_err!(format!(
                "azimuth of ({}, {}, {}) undefined for x = 0",
                x, y, z
            )));
        }
        if z == 0.0 {
            return Err(domain_err!(format!(
                "inclination of ({}, {}, {}) undefined for z = 0",
                x, y, z
            )));
        }

        let fi = (y / x).atan();
        let psi = (self.planar.norm() / z).atan();
        Ok(Angle::Spherical {
            fi: round2(fi),
            psi: round2(psi),
        })
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Self::Output {
        Vector3D {
            planar: -self.planar,
            z: -self.z,
        }
    }
}

impl ApproxEq for Vector3D {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.planar.approx_eq(other.planar, margin) && self.z.approx_eq(other.z, margin)
    }
}
