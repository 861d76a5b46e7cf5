//! One-shot measurement commands (circle, triangle, square, cube, rectangle)

use std::collections::BTreeMap;
use std::process::ExitCode;

use serde::Serialize;

use super::input::{parse_number, InputError};
use super::output::Output;
use crate::domain::{validate_positive, Magnitude, Operand, Shape};

/// A computed measurement, as printed in JSON mode
#[derive(Debug, Serialize)]
pub struct Measurement {
    pub shape: Shape,
    pub label: String,
    pub inputs: BTreeMap<&'static str, Magnitude>,
    pub value: f64,
}

/// Parses, validates and computes a measurement from argument text
pub fn compute(shape: Shape, args: &[String]) -> Result<Measurement, InputError> {
    let mut inputs = BTreeMap::new();
    let mut operands = Vec::with_capacity(args.len());

    for (&name, text) in shape.inputs().iter().zip(args) {
        let magnitude = validate_positive(&parse_number(text)?)?;
        inputs.insert(name, magnitude);
        operands.push(Operand::from(magnitude));
    }

    let value = shape.evaluate(&operands)?;
    Ok(Measurement {
        shape,
        label: shape.label().to_string(),
        inputs,
        value,
    })
}

/// Runs a one-shot command, printing the result or the error
pub fn run(output: &Output, shape: Shape, args: &[String]) -> ExitCode {
    output.verbose_ctx(shape.as_str(), &format!("Arguments: {:?}", args));

    match compute(shape, args) {
        Ok(m) => {
            if output.is_json() {
                output.data(&m);
            } else {
                output.success(&format!("{}: {}", m.label, m.value));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.verbose_ctx(shape.as_str(), &format!("{} error: {:?}", e.kind(), e));
            output.error(e.kind(), &e.to_string());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn computes_rectangle() {
        let m = compute(Shape::Rectangle, &args(&["5", "3"])).unwrap();
        assert_eq!(m.value, 15.0);
        assert_eq!(m.label, "Rectangle area");
        assert_eq!(m.inputs["base"].get(), 5.0);
        assert_eq!(m.inputs["height"].get(), 3.0);
    }

    #[test]
    fn circle_accepts_decimals_on_the_command_line() {
        let m = compute(Shape::Circle, &args(&["2.5"])).unwrap();
        assert_eq!(m.value, std::f64::consts::PI * 6.25);
    }

    #[test]
    fn reports_parse_and_value_errors() {
        let err = compute(Shape::Square, &args(&["abc"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = compute(Shape::Triangle, &args(&["0", "4"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn first_invalid_argument_stops_parsing() {
        // The base is rejected before the unparseable height is looked at
        let err = compute(Shape::Rectangle, &args(&["-1", "wide"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn measurement_json_shape() {
        let m = compute(Shape::Cube, &args(&["2"])).unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["shape"], "cube");
        assert_eq!(json["label"], "Cube volume");
        assert_eq!(json["inputs"]["side"], 2.0);
        assert_eq!(json["value"], 8.0);
    }
}
