//! Interactive menu loop
//!
//! ```text
//! MenuPrompt -> ReadingInput -> Dispatch -> {Success, Failure} -> MenuPrompt
//!                                                                  \-> Exit
//! ```
//!
//! Every [`InputError`] is caught here, printed, and the loop carries on.
//! Only I/O failures on the console streams end the session early.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::input::{
    decode_line, parse_menu_choice, parse_operand, InputError, MenuChoice, MENU_MAX,
};
use super::output::Output;
use crate::domain::{ErrorKind, Operand, Shape};
use crate::suite;

/// Whether the loop keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// One run of the menu loop over a reader and a writer
pub struct Session<'a, R, W> {
    input: R,
    out: W,
    output: &'a Output,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, out: W, output: &'a Output) -> Self {
        Self { input, out, output }
    }

    /// Runs the menu until the user picks exit or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let prompt = format!("\nChoose an option (1-{}): ", MENU_MAX);
            let Some(raw) = self.read_line(&prompt)? else {
                self.output.verbose_ctx("menu", "End of input, leaving");
                break;
            };

            let step = match decode_line(&raw).and_then(|line| parse_menu_choice(&line)) {
                Ok(MenuChoice::Exit) => Step::Exit,
                Ok(MenuChoice::RunTests) => self.run_tests()?,
                Ok(MenuChoice::Measure(shape)) => self.measure(shape)?,
                Err(e) => {
                    self.report(&e)?;
                    Step::Continue
                }
            };

            if step == Step::Exit {
                self.output.verbose_ctx("menu", "Exit selected");
                break;
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- Geometry Calculator ---\n")?;
        for (i, shape) in Shape::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, shape.label())?;
        }
        writeln!(self.out, "6. Run the self-test suite")?;
        writeln!(self.out, "{}. Exit", MENU_MAX)?;
        Ok(())
    }

    /// Prompts and reads one raw line
    ///
    /// Returns None once input is exhausted. Decoding is left to the
    /// caller so malformed text is reported like any other bad input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<Vec<u8>>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush().context("Failed to flush output")?;

        let mut line = Vec::new();
        let bytes = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read input")?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn measure(&mut self, shape: Shape) -> Result<Step> {
        let mut operands: Vec<Operand> = Vec::with_capacity(shape.inputs().len());

        for name in shape.inputs() {
            let Some(raw) = self.read_line(&shape.prompt(name))? else {
                return Ok(Step::Exit);
            };
            match decode_line(&raw).and_then(|text| parse_operand(shape, &text)) {
                Ok(operand) => operands.push(operand),
                Err(e) => {
                    self.report(&e)?;
                    return Ok(Step::Continue);
                }
            }
        }

        self.output.verbose_ctx(
            shape.as_str(),
            &format!("Computing with {:?}", operands),
        );

        match shape.evaluate(&operands) {
            Ok(value) => writeln!(self.out, "{}: {}", shape.label(), value)?,
            Err(e) => self.report(&InputError::from(e))?,
        }
        Ok(Step::Continue)
    }

    fn run_tests(&mut self) -> Result<Step> {
        let report = suite::run();
        self.output.verbose_ctx(
            "test",
            &format!("{} checks, {} failed", report.total, report.failed),
        );
        writeln!(self.out, "{}", report)?;
        Ok(Step::Continue)
    }

    fn report(&mut self, err: &InputError) -> Result<()> {
        self.output
            .verbose_ctx("error", &format!("{} error: {:?}", err.kind(), err));

        match err {
            InputError::InvalidOption(_) => writeln!(
                self.out,
                "Invalid option. Choose a number between 1 and {}.",
                MENU_MAX
            )?,
            e if e.kind() == ErrorKind::Type => writeln!(self.out, "Error: {}", e)?,
            e => writeln!(self.out, "Error: {}. Make sure you enter a valid number.", e)?,
        }
        Ok(())
    }
}
