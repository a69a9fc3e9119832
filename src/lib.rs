//! Euclidean vector develop kit
//!
//! Magnitude, dot product, cross product and axis angles of 2D and 3D vectors
//!
//! Or convert polar and spherical coordinates to cartesian vectors

#[macro_use]
pub mod vec_error;
pub mod vec_adapter;
pub mod vec_model;

pub use vec_error::VectorError;
