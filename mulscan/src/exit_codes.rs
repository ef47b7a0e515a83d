//! Stable exit codes for the mulscan CLI.

/// Input was read and both answers were printed.
pub const OK: i32 = 0;
/// Input could not be read (I/O failure or invalid UTF-8).
pub const FAILURE: i32 = 1;
