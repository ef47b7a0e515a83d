//! Scanner for multiply instructions hidden in corrupted memory.
//!
//! The input is a single text buffer containing `mul(x,y)`, `do()` and
//! `don't()` instructions surrounded by noise. The crate keeps a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic scanning and evaluation. No I/O.
//! - **[`input`]**: Reading the buffer from a stream.
//!
//! [`solve`] ties the two together for the CLI.

pub mod core;
pub mod exit_codes;
pub mod input;
pub mod logging;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
