//! Deterministic, pure logic shared by the leafops commands.
//!
//! Core modules must be free of I/O side effects. They operate on borrowed
//! in-memory data and return deterministic outputs suitable for tests.

pub mod property_name;
pub mod running_max;
