//! Shared utilities

pub mod shell;

pub use shell::{ColorChoice, Shell, ShellMode, Status, Verbosity};
