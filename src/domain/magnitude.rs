//! Positive magnitudes and the validator that produces them
//!
//! A magnitude is a radius, base, height or side length. Input arrives as an
//! [`Operand`], which may hold an integer, a float or text; only
//! [`validate_positive`] turns it into a [`Magnitude`].
//!
//! Checks run in a fixed order: the type is checked before the sign, so a
//! non-numeric operand never reaches the positivity check.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Category of a failure, shared by the validator and the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A value expected to be numeric is not
    Type,
    /// A numeric value violates a positivity or range constraint
    Value,
    /// Text could not be converted to the required numeric type
    Parse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::Type => "type",
            ErrorKind::Value => "value",
            ErrorKind::Parse => "parse",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MagnitudeError {
    #[error("the value must be a number, got '{0}'")]
    NotNumeric(String),

    #[error("the value must be greater than zero, got {0}")]
    NotPositive(f64),
}

impl MagnitudeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MagnitudeError::NotNumeric(_) => ErrorKind::Type,
            MagnitudeError::NotPositive(_) => ErrorKind::Value,
        }
    }
}

/// An unvalidated value presented to the validator
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Operand {
    /// Returns the numeric value, or None for text
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Operand::Int(i) => Some(*i as f64),
            Operand::Float(f) => Some(*f),
            Operand::Text(_) => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(i) => write!(f, "{}", i),
            Operand::Float(x) => write!(f, "{}", x),
            Operand::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Int(value.into())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<Magnitude> for Operand {
    fn from(value: Magnitude) -> Self {
        Operand::Float(value.get())
    }
}

/// A numeric value strictly greater than zero
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "f64")]
pub struct Magnitude(f64);

impl Magnitude {
    /// Creates a magnitude from a number, rejecting zero, negatives and NaN
    pub fn new(value: f64) -> Result<Self, MagnitudeError> {
        // NaN compares false, so it falls through to the error
        if value > 0.0 {
            Ok(Self(value))
        } else {
            Err(MagnitudeError::NotPositive(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<Magnitude> for f64 {
    fn from(m: Magnitude) -> Self {
        m.0
    }
}

/// Validates that an operand is numeric and strictly positive
pub fn validate_positive(value: &Operand) -> Result<Magnitude, MagnitudeError> {
    let number = value
        .as_number()
        .ok_or_else(|| MagnitudeError::NotNumeric(value.to_string()))?;
    Magnitude::new(number)
}
