//! Rural education coordinator CLI
//!
//! Command implementations and the interactive coordinator, shared by the
//! `rural-edu` binary and its tests.

pub mod commands;
pub mod config;
pub mod coordinator;
pub mod progress;

pub use commands::CommandContext;
pub use coordinator::{Coordinator, MenuChoice};
