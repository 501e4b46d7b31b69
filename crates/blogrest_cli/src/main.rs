//! `blogrest` binary entry point.
//!
//! Parses arguments, dispatches the command, prints any failure to stderr
//! and exits non-zero.

mod args;
mod commands;
mod errors;

fn main() {
    if let Err(e) = commands::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
