//! Command-line interface module.

mod args;
pub mod common;
pub mod extract;
pub mod mount;
pub mod open;
pub mod rewrite;

pub use args::{Cli, Commands, LocationArgs};
