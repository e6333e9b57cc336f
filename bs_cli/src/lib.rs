//! Internal modules for the schema loader CLI.
//!
//! This library provides menu parsing, the terminal abstraction and the
//! interactive session used by the bs_cli binary.

pub mod console;
pub mod menu;
pub mod session;
