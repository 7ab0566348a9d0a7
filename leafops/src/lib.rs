//! Running maximum and test property name checks.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic operations ([`core::running_max`],
//!   [`core::property_name`]). No I/O, no shared state.
//! - **[`io`]**: Config loading and input parsing.
//!
//! Orchestration modules ([`scan`], [`check`]) combine core logic with
//! configuration to implement CLI commands.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod scan;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
