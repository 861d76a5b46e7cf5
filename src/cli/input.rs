//! Text-to-number conversion at the input boundary
//!
//! Everything the user types arrives here as text. Menu choices become
//! [`MenuChoice`]s and magnitudes become [`Operand`]s ready for the
//! validator.

use thiserror::Error;

use crate::domain::{ErrorKind, MagnitudeError, Operand, Shape};

/// Highest menu option
pub const MENU_MAX: i64 = 7;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("the entered value is not a number")]
    NotNumericText(String),

    #[error("could not convert '{0}' to a number")]
    InvalidNumber(String),

    #[error("option {0} is out of range")]
    InvalidOption(i64),

    #[error("invalid option '{0}': expected a whole number")]
    InvalidMenuChoice(String),

    #[error("the input is not valid UTF-8: {0}")]
    InvalidText(String),

    #[error(transparent)]
    Magnitude(#[from] MagnitudeError),
}

impl InputError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InputError::NotNumericText(_) | InputError::InvalidOption(_) => ErrorKind::Value,
            InputError::InvalidNumber(_)
            | InputError::InvalidMenuChoice(_)
            | InputError::InvalidText(_) => ErrorKind::Parse,
            InputError::Magnitude(e) => e.kind(),
        }
    }
}

/// What the user picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Measure(Shape),
    RunTests,
    Exit,
}

impl MenuChoice {
    /// Maps a menu number to its choice
    pub fn from_number(n: i64) -> Result<Self, InputError> {
        match n {
            1..=5 => Ok(MenuChoice::Measure(Shape::ALL[(n - 1) as usize])),
            6 => Ok(MenuChoice::RunTests),
            7 => Ok(MenuChoice::Exit),
            _ => Err(InputError::InvalidOption(n)),
        }
    }
}

/// Zero code points of the decimal digit blocks accepted besides ASCII
const DIGIT_ZEROS: [u32; 23] = [
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0xFF10,
];

/// Maps a decimal digit from any supported script to its ASCII form
fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    let code = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .and_then(|&zero| char::from_digit(code - zero, 10))
}

/// Replaces non-ASCII decimal digits so the float parser accepts them
fn normalize_digits(text: &str) -> String {
    text.chars().map(|c| ascii_digit(c).unwrap_or(c)).collect()
}

/// Decodes a raw input line and strips its line terminator
pub fn decode_line(raw: &[u8]) -> Result<String, InputError> {
    let text = std::str::from_utf8(raw).map_err(|e| InputError::InvalidText(e.to_string()))?;
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

/// Parses a line of menu input
pub fn parse_menu_choice(line: &str) -> Result<MenuChoice, InputError> {
    let trimmed = line.trim();
    let n = trimmed
        .parse::<i64>()
        .map_err(|_| InputError::InvalidMenuChoice(trimmed.to_string()))?;
    MenuChoice::from_number(n)
}

/// Converts magnitude text to a float operand
pub fn parse_number(text: &str) -> Result<Operand, InputError> {
    let trimmed = text.trim();
    normalize_digits(trimmed)
        .parse::<f64>()
        .map(Operand::Float)
        .map_err(|_| InputError::InvalidNumber(trimmed.to_string()))
}

/// Converts circle-radius text, which must consist of numeric characters only
///
/// Signs, decimal points and whitespace all fail the pre-check, so "2.5"
/// is rejected here even though [`parse_number`] would accept it.
pub fn parse_radius(text: &str) -> Result<Operand, InputError> {
    if text.is_empty() || !text.chars().all(char::is_numeric) {
        return Err(InputError::NotNumericText(text.to_string()));
    }
    parse_number(text)
}

/// Parses text for one input of a shape
pub fn parse_operand(shape: Shape, text: &str) -> Result<Operand, InputError> {
    match shape {
        Shape::Circle => parse_radius(text),
        _ => parse_number(text),
    }
}
