//! Deterministic, pure logic for recognizing and evaluating instructions.
//!
//! Core modules must be free of I/O side effects. Every evaluation owns its
//! own accumulator and toggle, so repeated calls on the same text agree.

pub mod evaluate;
pub mod instruction;
pub mod scan;
