//! Sum the multiply instructions hidden in corrupted memory.
//!
//! Reads all of stdin, then prints the unconditional sum (`Part1`) and the
//! sum gated by `do()`/`don't()` (`Part2`).

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use mulscan::exit_codes;
use mulscan::logging;
use mulscan::solve::solve_from_reader;

#[derive(Parser)]
#[command(
    name = "mulscan",
    version,
    about = "Sum mul(x,y) instructions found in corrupted memory on stdin"
)]
struct Cli {}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    logging::init();
    let answers = solve_from_reader(io::stdin().lock()).context("read stdin")?;
    println!("{answers}");
    Ok(())
}
