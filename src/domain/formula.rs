//! Area and volume formulas
//!
//! Every formula validates its parameters in argument order before
//! computing, and returns the first validation failure unchanged.

use std::f64::consts::PI;

use serde::Serialize;

use super::magnitude::{validate_positive, MagnitudeError, Operand};

/// Area of a circle: π · radius²
pub fn circle_area(radius: impl Into<Operand>) -> Result<f64, MagnitudeError> {
    let radius = validate_positive(&radius.into())?.get();
    Ok(PI * radius.powi(2))
}

/// Area of a triangle: (base · height) / 2
pub fn triangle_area(
    base: impl Into<Operand>,
    height: impl Into<Operand>,
) -> Result<f64, MagnitudeError> {
    let base = validate_positive(&base.into())?.get();
    let height = validate_positive(&height.into())?.get();
    Ok(base * height / 2.0)
}

/// Area of a square: side²
pub fn square_area(side: impl Into<Operand>) -> Result<f64, MagnitudeError> {
    let side = validate_positive(&side.into())?.get();
    Ok(side.powi(2))
}

/// Volume of a cube: side³
pub fn cube_volume(side: impl Into<Operand>) -> Result<f64, MagnitudeError> {
    let side = validate_positive(&side.into())?.get();
    Ok(side.powi(3))
}

/// Area of a rectangle: base · height
pub fn rectangle_area(
    base: impl Into<Operand>,
    height: impl Into<Operand>,
) -> Result<f64, MagnitudeError> {
    let base = validate_positive(&base.into())?.get();
    let height = validate_positive(&height.into())?.get();
    Ok(base * height)
}

/// The shapes geocalc knows how to measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Circle,
    Triangle,
    Square,
    Cube,
    Rectangle,
}

impl Shape {
    /// All shapes in menu order
    pub const ALL: [Shape; 5] = [
        Shape::Circle,
        Shape::Triangle,
        Shape::Square,
        Shape::Cube,
        Shape::Rectangle,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
            Shape::Square => "square",
            Shape::Cube => "cube",
            Shape::Rectangle => "rectangle",
        }
    }

    /// Label printed in front of a result
    pub fn label(&self) -> &str {
        match self {
            Shape::Circle => "Circle area",
            Shape::Triangle => "Triangle area",
            Shape::Square => "Square area",
            Shape::Cube => "Cube volume",
            Shape::Rectangle => "Rectangle area",
        }
    }

    /// Names of the magnitudes this shape needs, in argument order
    pub fn inputs(&self) -> &'static [&'static str] {
        match self {
            Shape::Circle => &["radius"],
            Shape::Triangle | Shape::Rectangle => &["base", "height"],
            Shape::Square | Shape::Cube => &["side"],
        }
    }

    /// Prompt shown when reading the given input interactively
    pub fn prompt(&self, input: &str) -> String {
        format!("Enter the {} of the {}: ", input, self.as_str())
    }

    /// Runs this shape's formula over the operands, in [`Shape::inputs`] order
    ///
    /// A missing operand is reported as non-numeric.
    pub fn evaluate(&self, operands: &[Operand]) -> Result<f64, MagnitudeError> {
        let arg = |i: usize| {
            operands
                .get(i)
                .cloned()
                .unwrap_or_else(|| Operand::Text(String::new()))
        };

        match self {
            Shape::Circle => circle_area(arg(0)),
            Shape::Triangle => triangle_area(arg(0), arg(1)),
            Shape::Square => square_area(arg(0)),
            Shape::Cube => cube_volume(arg(0)),
            Shape::Rectangle => rectangle_area(arg(0), arg(1)),
        }
    }
}
