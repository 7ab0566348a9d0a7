//! Stable exit codes for leafops CLI commands.

/// Command succeeded: a result was computed or every name was accepted.
pub const OK: i32 = 0;
/// Command failed due to bad arguments, invalid input/config or other errors.
pub const INVALID: i32 = 1;
/// `leafops check-name` found at least one reserved name.
pub const REJECTED: i32 = 2;
/// `leafops running-max` produced no result (empty input or non-positive count).
pub const ABSENT: i32 = 3;
