use crate::vec_error::VectorError;

mod vector2d;
mod vector3d;

pub use self::vector2d::*;
pub use self::vector3d::*;

/// angle of a vector against the coordinate axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    /// angle to the positive x axis, in degrees within [0, 180]
    Planar(f64),
    /// azimuth `fi` in the xy plane and inclination `psi` from the z axis, in radians
    Spherical { fi: f64, psi: f64 },
}

/// capability set shared by 2D and 3D vectors
pub trait Vector {
    /// number of components
    fn dimension(&self) -> usize;

    /// components in x, y[, z] order
    fn components(&self) -> Vec<f64>;

    /// euclidean norm, rounded to 2 decimals
    fn abs(&self) -> f64;

    /// dot product, rounded to 2 decimals
    ///
    /// fails with [`VectorError::DimensionMismatch`] when `other` has a different dimension
    fn cdot(&self, other: &dyn Vector) -> Result<f64, VectorError>;

    /// axis angle: degrees for 2D, radians `(fi, psi)` for 3D
    fn angle(&self) -> Result<Angle, VectorError>;
}

/// round the stored binary value to 2 decimals
///
/// exact binary ties go to even, e.g. 0.125 gives 0.12, while 0.015 is stored
/// just below the tie and gives 0.01
pub fn round2(v: f64) -> f64 {
    format!("{:.2}", v).parse().unwrap_or(v)
}

/// components of `other`, which must carry exactly `N` of them
pub(crate) fn components_of<const N: usize>(
    other: &dyn Vector,
) -> Result<[f64; N], VectorError> {
    let found = other.dimension();
    if found != N {
        return Err(VectorError::DimensionMismatch { expected: N, found });
    }
    other
        .components()
        .try_into()
        .map_err(|components: Vec<f64>| VectorError::DimensionMismatch {
            expected: N,
            found: components.len(),
        })
}

#[cfg(test)]
mod test_vec_model {
    use super::*;
    use float_cmp::{ApproxEq, F64Margin};

    #[test]
    fn test_round2() {
        assert!(2.24_f64.approx_eq(round2(5_f64.sqrt()), F64Margin::default()));
        assert!(2.6_f64.approx_eq(round2(2.598), F64Margin::default()));
        assert!((-3.0_f64).approx_eq(round2(-2.999), F64Margin::default()));
        assert!(0.01_f64.approx_eq(round2(0.005), F64Margin::default()));
    }

    #[test]
    fn test_round2_near_ties() {
        assert_eq!(round2(0.015), 0.01);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(-0.015), -0.01);
        assert_eq!(round2(1.005), 1.0);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(Vector2D::new(0.015, 0.0).abs(), 0.01);
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_dyn_vectors() {
        let vectors: Vec<Box<dyn Vector>> = vec![
            Box::new(Vector2D::new(3.0, 4.0)),
            Box::new(Vector3D::new(2.0, 3.0, 6.0)),
        ];
        let norms: Vec<f64> = vectors.iter().map(|v| v.abs()).collect();
        assert_eq!(norms, vec![5.0, 7.0]);
        assert_eq!(vectors[0].components().len(), vectors[0].dimension());
        assert_eq!(vectors[1].components().len(), vectors[1].dimension());
    }

    #[test]
    fn test_components_of() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        assert_eq!(components_of::<3>(&v), Ok([1.0, 2.0, 3.0]));
        assert_eq!(
            components_of::<2>(&v),
            Err(VectorError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    /// reports three components but only carries two
    struct ShortVector;

    impl Vector for ShortVector {
        fn dimension(&self) -> usize {
            3
        }

        fn components(&self) -> Vec<f64> {
            vec![1.0, 2.0]
        }

        fn abs(&self) -> f64 {
            2.24
        }

        fn cdot(&self, _: &dyn Vector) -> Result<f64, VectorError> {
            Ok(0.0)
        }

        fn angle(&self) -> Result<Angle, VectorError> {
            Ok(Angle::Planar(63.49))
        }
    }

    #[test]
    fn test_inconsistent_components() {
        let mismatch = VectorError::DimensionMismatch {
            expected: 3,
            found: 2,
        };
        let v = Vector3D::new(1.0, 1.0, 2.0);
        assert_eq!(v.cdot(&ShortVector), Err(mismatch.clone()));
        assert_eq!(v.cross_multiplication(&ShortVector), Err(mismatch));
        assert_eq!(
            Vector2D::new(1.0, 2.0).cdot(&ShortVector),
            Err(VectorError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }
}
