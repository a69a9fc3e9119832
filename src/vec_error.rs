//! vector error type

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// operands of a binary operation have different dimensionality
    DimensionMismatch { expected: usize, found: usize },
    /// geometry degenerates, e.g. a reference axis of zero length
    Domain(String),
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorError::DimensionMismatch { expected, found } => write!(
                f,
                "[VectorError]: dimension mismatch, expected {} components but found {}",
                expected, found
            ),
            VectorError::Domain(err) => write!(f, "[VectorError]: {}", err),
        }
    }
}

impl Error for VectorError {}

#[macro_export]
macro_rules! domain_err {
    ( $x:expr ) => {{
        $crate::vec_error::VectorError::Domain(format!("{}:{} : {}", file!(), line!(), $x))
    }};
}

#[cfg(test)]
mod test_vec_error {
    use super::*;

    #[test]
    fn test_display() {
        let err = VectorError::DimensionMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "[VectorError]: dimension mismatch, expected 3 components but found 2"
        );

        let err = domain_err!("axis collapsed");
        let msg = err.to_string();
        assert!(msg.starts_with("[VectorError]: "));
        assert!(msg.contains("vec_error.rs"));
        assert!(msg.ends_with(": axis collapsed"));
    }

    #[test]
    fn test_boxed_error() {
        let err: Box<dyn Error> = Box::new(domain_err!("z is zero"));
        assert!(err.downcast_ref::<VectorError>().is_some());
    }
}
