//! geocalc - An interactive calculator for elementary shapes
//!
//! Computes the areas of circles, triangles, squares and rectangles and the
//! volume of cubes from positive magnitudes. Every input goes through a
//! shared validator before a formula runs, and a built-in self-test suite
//! can be run from the menu or the command line.

pub mod domain;
pub mod suite;
pub mod cli;

pub use domain::{
    circle_area, cube_volume, rectangle_area, square_area, triangle_area, validate_positive,
    ErrorKind, Magnitude, MagnitudeError, Operand, Shape,
};
pub use suite::SuiteReport;
