//! synomorph CLI binary.

use clap::Parser;
use std::process;
use synomorph::cli::{args::*, commands::*};

fn main() {
    let args = SynomorphArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
