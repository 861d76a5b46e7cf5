//! geocalc - Areas and volumes of elementary shapes

use std::process::ExitCode;

fn main() -> ExitCode {
    match geocalc::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
