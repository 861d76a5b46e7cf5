//! Usage instructions shown at startup

use std::io::{self, Write};

use crate::domain::Shape;

fn rule_for(shape: Shape) -> (&'static str, &'static str) {
    match shape {
        Shape::Circle => ("🔵", "The radius must be a positive number greater than 0."),
        Shape::Triangle => (
            "🔺",
            "The base and the height must be positive numbers greater than 0.",
        ),
        Shape::Square => ("🟩", "The side must be a positive number greater than 0."),
        Shape::Cube => ("🟦", "The side must be a positive number greater than 0."),
        Shape::Rectangle => (
            "🟧",
            "The base and the height must be positive numbers greater than 0.",
        ),
    }
}

/// Writes the instruction banner describing the valid input for each shape
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "{}🔢 Usage Instructions 🔢", " ".repeat(15))?;
    writeln!(out, "{}", "=".repeat(60))?;

    for (i, shape) in Shape::ALL.iter().enumerate() {
        let (icon, rule) = rule_for(*shape);
        writeln!(out, "{} {}:", icon, shape.label())?;
        writeln!(out, "   ➡  {}", rule)?;
        writeln!(out, "   🚫 Negative values and zero are not allowed.")?;
        if i + 1 < Shape::ALL.len() {
            writeln!(out, "{}", "-".repeat(60))?;
        }
    }

    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_covers_every_shape() {
        let mut buf = Vec::new();
        write_banner(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Usage Instructions"));
        for shape in Shape::ALL {
            assert!(text.contains(shape.label()), "missing {}", shape.label());
        }
        assert_eq!(text.matches("Negative values and zero are not allowed.").count(), 5);
    }
}
