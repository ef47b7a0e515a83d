//! Instruction shapes recognized in the input buffer.

/// A single recognized instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `do()`: later multiplies count again.
    Do,
    /// `don't()`: later multiplies are skipped.
    Dont,
    /// `mul(lhs,rhs)` with both operands in `0..=999`.
    Mul { lhs: u32, rhs: u32 },
}

impl Instruction {
    /// Product of a multiply; `None` for toggles.
    pub fn product(self) -> Option<u64> {
        match self {
            Self::Mul { lhs, rhs } => Some(u64::from(lhs) * u64::from(rhs)),
            Self::Do | Self::Dont => None,
        }
    }
}
