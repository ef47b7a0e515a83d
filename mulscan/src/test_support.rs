//! Test-only puzzle fixtures and buffer helpers.

use std::io::Cursor;

use crate::input::InputBuffer;

/// Worked example for the unconditional sum.
pub const PART1_SAMPLE: &str =
    "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
pub const PART1_SAMPLE_ANSWER: u64 = 161;

/// Worked example for the conditional sum.
pub const PART2_SAMPLE: &str =
    "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
pub const PART2_SAMPLE_ANSWER: u64 = 48;

/// Build a buffer the way stdin is read, one newline-terminated line each.
pub fn buffer(lines: &[&str]) -> InputBuffer {
    let mut raw = lines.join("\n");
    raw.push('\n');
    InputBuffer::read_from(Cursor::new(raw)).expect("in-memory read")
}
