//! Coordinate adapters
//!
//! Translate polar and spherical coordinate descriptions into cartesian vectors

use crate::vec_model::{round2, Vector2D, Vector3D};

/// polar to cartesian conversion
pub trait VectorAdapter2D {
    fn convert(&self) -> Vector2D;
}

/// spherical to cartesian conversion
pub trait VectorAdapter3D {
    fn convert(&self) -> Vector3D;
}

/// polar coordinate, angle measured in degrees counterclockwise from the x axis
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Adapter2D {
    pub r: f64,
    pub angle: f64,
}

impl Adapter2D {
    pub fn new(r: f64, angle: f64) -> Self {
        Adapter2D { r, angle }
    }
}

impl VectorAdapter2D for Adapter2D {
    fn convert(&self) -> Vector2D {
        let angle = self.angle.to_radians();
        let x = self.r * angle.cos();
        let y = self.r * angle.sin();
        Vector2D::new(round2(x), round2(y))
    }
}

/// spherical coordinate in physics convention, angles in degrees
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Adapter3D {
    pub r: f64,
    /// inclination from the z axis
    pub psi: f64,
    /// azimuth in the xy plane
    pub fi: f64,
}

impl Adapter3D {
    pub fn new(r: f64, psi: f64, fi: f64) -> Self {
        Adapter3D { r, psi, fi }
    }
}

impl VectorAdapter3D for Adapter3D {
    fn convert(&self) -> Vector3D {
        let (psi, fi) = (self.psi.to_radians(), self.fi.to_radians());
        let x = self.r * psi.sin() * fi.cos();
        let y = self.r * psi.sin() * fi.sin();
        let z = self.r * psi.cos();
        Vector3D::new(round2(x), round2(y), round2(z))
    }
}
