//! Accumulation of multiply products over scanned instructions.

use tracing::debug;

use crate::core::instruction::Instruction;
use crate::core::scan;

/// Whether multiplies currently count toward the conditional sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    #[default]
    Enabled,
    Disabled,
}

/// Sum every `mul` product, in any letter case, ignoring toggles.
pub fn sum_products(input: &str) -> u64 {
    scan::muls(input).filter_map(Instruction::product).sum()
}

/// Sum the `mul` products that appear while multiplies are enabled.
pub fn sum_enabled_products(input: &str) -> u64 {
    sum_while_enabled(scan::instructions(input))
}

/// Fold instructions in order, starting enabled.
///
/// `don't()` disables and `do()` re-enables; a multiply only counts while
/// enabled.
pub fn sum_while_enabled<I>(instructions: I) -> u64
where
    I: IntoIterator<Item = Instruction>,
{
    let mut toggle = Toggle::default();
    let mut sum = 0;
    for instruction in instructions {
        match (instruction, toggle) {
            (Instruction::Do, _) => toggle = Toggle::Enabled,
            (Instruction::Dont, _) => toggle = Toggle::Disabled,
            (Instruction::Mul { .. }, Toggle::Enabled) => {
                sum += instruction.product().unwrap_or_default();
            }
            (Instruction::Mul { lhs, rhs }, Toggle::Disabled) => {
                debug!(lhs, rhs, "skipped disabled mul");
            }
        }
    }
    sum
}
