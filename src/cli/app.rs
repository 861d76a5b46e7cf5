//! Main CLI application structure

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::banner::write_banner;
use super::interactive::Session;
use super::measure;
use super::output::{Output, OutputFormat};
use crate::domain::Shape;
use crate::suite;

#[derive(Parser)]
#[command(name = "geocalc")]
#[command(author, version, about = "Areas and volumes of elementary shapes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the instructions and run the interactive menu
    Interactive,

    /// Area of a circle
    Circle {
        /// Radius, greater than 0
        #[arg(allow_hyphen_values = true)]
        radius: String,
    },

    /// Area of a triangle
    Triangle {
        /// Base, greater than 0
        #[arg(allow_hyphen_values = true)]
        base: String,

        /// Height, greater than 0
        #[arg(allow_hyphen_values = true)]
        height: String,
    },

    /// Area of a square
    Square {
        /// Side length, greater than 0
        #[arg(allow_hyphen_values = true)]
        side: String,
    },

    /// Volume of a cube
    Cube {
        /// Side length, greater than 0
        #[arg(allow_hyphen_values = true)]
        side: String,
    },

    /// Area of a rectangle
    Rectangle {
        /// Base, greater than 0
        #[arg(allow_hyphen_values = true)]
        base: String,

        /// Height, greater than 0
        #[arg(allow_hyphen_values = true)]
        height: String,
    },

    /// Run the self-test suite once
    Test,

    /// Print the usage instructions
    Banner,
}

/// Main entry point for the CLI
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("geocalc starting");

    let code = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            interactive(&output)?;
            ExitCode::SUCCESS
        }

        Commands::Circle { radius } => measure::run(&output, Shape::Circle, &[radius]),
        Commands::Triangle { base, height } => {
            measure::run(&output, Shape::Triangle, &[base, height])
        }
        Commands::Square { side } => measure::run(&output, Shape::Square, &[side]),
        Commands::Cube { side } => measure::run(&output, Shape::Cube, &[side]),
        Commands::Rectangle { base, height } => {
            measure::run(&output, Shape::Rectangle, &[base, height])
        }

        Commands::Test => {
            let report = suite::run();
            output.verbose_ctx(
                "test",
                &format!("{} checks, {} failed", report.total, report.failed),
            );
            if output.is_json() {
                output.data(&report);
            } else {
                println!("{}", report);
            }
            if report.passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }

        Commands::Banner => {
            let mut stdout = io::stdout().lock();
            write_banner(&mut stdout).context("Failed to write banner")?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

fn interactive(output: &Output) -> Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    write_banner(&mut stdout).context("Failed to write banner")?;
    Session::new(stdin, &mut stdout, output).run()?;
    stdout.flush().context("Failed to flush output")?;

    output.verbose("Session ended");
    Ok(())
}
