//! I/O helpers for leafops commands.

pub mod config;
pub mod input;
