//! Running both parts over one input buffer.

use std::fmt;
use std::io::BufRead;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::evaluate::{sum_enabled_products, sum_products};
use crate::input::InputBuffer;

/// Results of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    /// Sum of every multiply.
    pub part1: u64,
    /// Sum of multiplies that were enabled when reached.
    pub part2: u64,
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Part1: {}", self.part1)?;
        write!(f, "Part2: {}", self.part2)
    }
}

/// Run both parts as independent scans of `input`.
pub fn solve(input: &InputBuffer) -> Answers {
    let answers = Answers {
        part1: sum_products(input.as_str()),
        part2: sum_enabled_products(input.as_str()),
    };
    info!(part1 = answers.part1, part2 = answers.part2, "solved");
    answers
}

/// Read the whole stream, then solve it.
pub fn solve_from_reader<R: BufRead>(reader: R) -> Result<Answers> {
    let input = InputBuffer::read_from(reader).context("load input")?;
    Ok(solve(&input))
}
