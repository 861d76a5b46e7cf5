//! Domain models for geocalc
//!
//! Contains the validator and the formulas without any I/O concerns.

mod magnitude;
mod formula;

pub use magnitude::{validate_positive, ErrorKind, Magnitude, MagnitudeError, Operand};
pub use formula::{
    circle_area, cube_volume, rectangle_area, square_area, triangle_area, Shape,
};
