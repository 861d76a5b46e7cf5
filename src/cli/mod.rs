//! # Command-Line Interface
//!
//! User-facing commands, the interactive menu and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | (none), `interactive` | Instructions banner, then the numbered menu |
//! | `circle`, `triangle`, `square`, `cube`, `rectangle` | Compute once from arguments |
//! | `test` | Run the self-test suite |
//! | `banner` | Print the instructions only |
//!
//! ## Output Formats
//!
//! One-shot commands and `test` support the `--format` flag:
//! - `text` (default) - `<Label>: <value>`
//! - `json` - Machine-parseable JSON
//!
//! The interactive menu always prints text.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! geocalc --verbose cube 2
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod banner;
mod input;
mod interactive;
mod measure;
mod output;

pub use app::{run, Cli, Commands};
pub use banner::write_banner;
pub use input::{parse_menu_choice, parse_number, parse_radius, InputError, MenuChoice};
pub use interactive::Session;
pub use measure::{compute, Measurement};
pub use output::{Output, OutputFormat};
