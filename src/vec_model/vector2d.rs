use std::ops::Neg;

use float_cmp::{ApproxEq, F64Margin};

use super::*;
use crate::vec_adapter::Adapter2D;

/// two component vector in the plane
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    x: f64,
    y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// polar description of this vector: its magnitude and its angle in degrees
    ///
    /// The angle lies in [0, 180], so a vector below the x axis comes back
    /// mirrored onto the upper half plane.
    pub fn to_polar(&self) -> Result<Adapter2D, VectorError> {
        Ok(Adapter2D::new(self.abs(), self.planar_angle()?))
    }

    pub(crate) fn norm(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    fn planar_angle(&self) -> Result<f64, VectorError> {
        let x_axis = Vector2D::new(self.x, 0.0);
        let abs_x_axis = x_axis.abs();
        if abs_x_axis == 0.0 {
            return Err(domain_err!(format!(
                "angle of ({}, {}) undefined, reference axis collapses for x = 0",
                self.x, self.y
            )));
        }

        // reference axis points along the sign of x, fold back onto +x
        let cos_theta = self.cdot(&x_axis)? / (self.abs() * abs_x_axis) * self.x.signum();
        Ok(round2(cos_theta.clamp(-1.0, 1.0).acos().to_degrees()))
    }
}

impl Vector for Vector2D {
    fn dimension(&self) -> usize {
        2
    }

    fn components(&self) -> Vec<f64> {
        vec![self.x, self.y]
    }

    fn abs(&self) -> f64 {
        round2(self.norm())
    }

    fn cdot(&self, other: &dyn Vector) -> Result<f64, VectorError> {
        let [x_2, y_2] = components_of::<2>(other)?;
        Ok(round2(self.x * x_2 + self.y * y_2))
    }

    fn angle(&self) -> Result<Angle, VectorError> {
        Ok(Angle::Planar(self.planar_angle()?))
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Self::Output {
        Vector2D::new(-self.x, -self.y)
    }
}

impl ApproxEq for Vector2D {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}
