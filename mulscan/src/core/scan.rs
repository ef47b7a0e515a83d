//! Left-to-right recognition of instructions in an input buffer.
//!
//! Matches are non-overlapping and leftmost-first. Operands are 1-3 ASCII
//! digits; anything else (extra digits, whitespace, other numerals) is noise.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::core::instruction::Instruction;

/// `mul(D,D)` with the letters in any case.
static MUL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)mul\((?<lhs>[0-9]{1,3}),(?<rhs>[0-9]{1,3})\)")
        .expect("mul pattern should be valid")
});

/// `do()`, `don't()` or `mul(D,D)`, exact case.
static INSTRUCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?<do>do\(\))|(?<dont>don't\(\))|mul\((?<lhs>[0-9]{1,3}),(?<rhs>[0-9]{1,3})\)",
    )
    .expect("instruction pattern should be valid")
});

/// Multiplies only, case-insensitive.
pub fn muls(input: &str) -> impl Iterator<Item = Instruction> + '_ {
    MUL_RE.captures_iter(input).filter_map(|caps| {
        let instruction = parse_mul(&caps)?;
        trace_match(&caps, instruction);
        Some(instruction)
    })
}

/// Toggles and multiplies in input order, case-sensitive.
pub fn instructions(input: &str) -> impl Iterator<Item = Instruction> + '_ {
    INSTRUCTION_RE.captures_iter(input).filter_map(|caps| {
        let instruction = if caps.name("do").is_some() {
            Instruction::Do
        } else if caps.name("dont").is_some() {
            Instruction::Dont
        } else {
            parse_mul(&caps)?
        };
        trace_match(&caps, instruction);
        Some(instruction)
    })
}

fn parse_mul(caps: &Captures<'_>) -> Option<Instruction> {
    let lhs = caps.name("lhs")?.as_str().parse().ok()?;
    let rhs = caps.name("rhs")?.as_str().parse().ok()?;
    Some(Instruction::Mul { lhs, rhs })
}

fn trace_match(caps: &Captures<'_>, instruction: Instruction) {
    let offset = caps.get(0).map_or(0, |m| m.start());
    trace!(offset, ?instruction, "matched instruction");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mul(lhs: u32, rhs: u32) -> Instruction {
        Instruction::Mul { lhs, rhs }
    }

    #[test]
    fn muls_finds_single_mul() {
        let found: Vec<_> = muls("mul(2,3)").collect();
        assert_eq!(found, vec![mul(2, 3)]);
    }

    #[test]
    fn muls_are_non_overlapping_and_in_order() {
        let found: Vec<_> = muls("mul(2,3)mul(4,5)").collect();
        assert_eq!(found, vec![mul(2, 3), mul(4, 5)]);
    }

    #[test]
    fn muls_reject_four_digit_operands() {
        assert_eq!(muls("mul(1000,2)").count(), 0);
        assert_eq!(muls("mul(2,1000)").count(), 0);
    }

    #[test]
    fn muls_accept_zero_and_three_digit_operands() {
        let found: Vec<_> = muls("mul(0,999)mul(007,1)").collect();
        assert_eq!(found, vec![mul(0, 999), mul(7, 1)]);
    }

    #[test]
    fn muls_reject_malformed_shapes() {
        for text in [
            "mul(2, 3)",
            "mul ( 2,3)",
            "mul[3,7]",
            "mul(32,64]",
            "mul(2,3",
            "mul(,3)",
            "mul(-2,3)",
        ] {
            assert_eq!(muls(text).count(), 0, "{text}");
        }
    }

    #[test]
    fn muls_reject_non_ascii_digits() {
        assert_eq!(muls("mul(\u{0663},2)").count(), 0);
    }

    #[test]
    fn muls_ignore_letter_case() {
        let found: Vec<_> = muls("MUL(2,3)MuL(4,5)").collect();
        assert_eq!(found, vec![mul(2, 3), mul(4, 5)]);
    }

    #[test]
    fn muls_restart_after_failed_prefix() {
        let found: Vec<_> = muls("mulmul(2,3)mul(mul(4,5))").collect();
        assert_eq!(found, vec![mul(2, 3), mul(4, 5)]);
    }

    #[test]
    fn muls_ignore_toggles() {
        let found: Vec<_> = muls("don't()mul(2,3)do()").collect();
        assert_eq!(found, vec![mul(2, 3)]);
    }

    #[test]
    fn instructions_recognize_toggles_and_muls_in_order() {
        let found: Vec<_> = instructions("mul(2,3)don't()mul(4,5)do()mul(1,1)").collect();
        assert_eq!(
            found,
            vec![
                mul(2, 3),
                Instruction::Dont,
                mul(4, 5),
                Instruction::Do,
                mul(1, 1),
            ]
        );
    }

    #[test]
    fn instructions_are_case_sensitive() {
        assert_eq!(instructions("MUL(2,3)DO()DON'T()").count(), 0);
    }

    #[test]
    fn instructions_match_do_inside_longer_words() {
        let found: Vec<_> = instructions("undo()?mul(8,5)").collect();
        assert_eq!(found, vec![Instruction::Do, mul(8, 5)]);
    }

    #[test]
    fn instructions_reject_toggles_with_arguments() {
        assert_eq!(instructions("do(1)don't(x)do_not()").count(), 0);
    }

    #[test]
    fn scans_are_repeatable() {
        let text = "xmul(2,4)don't()mul(5,5)";
        assert_eq!(
            instructions(text).collect::<Vec<_>>(),
            instructions(text).collect::<Vec<_>>()
        );
        assert_eq!(muls(text).count(), muls(text).count());
    }
}
