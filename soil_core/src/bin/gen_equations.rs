//! Print the liquefaction equation reference built from the registry.
//!
//! ```bash
//! cargo run --bin gen-equations              # markdown on stdout
//! cargo run --bin gen-equations -- refs.md   # write to a file
//! ```

use std::env;
use std::fs;
use std::process::ExitCode;

use soil_core::equations::generate_equations_markdown;

fn main() -> ExitCode {
    let markdown = generate_equations_markdown();

    let Some(path) = env::args().nth(1) else {
        print!("{markdown}");
        return ExitCode::SUCCESS;
    };

    match fs::write(&path, &markdown) {
        Ok(()) => {
            eprintln!("wrote {} bytes to {path}", markdown.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("cannot write {path}: {e}");
            ExitCode::FAILURE
        }
    }
}
