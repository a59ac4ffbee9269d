//! # CLI Layer
//!
//! This module is **one possible UI client** for attrsearch. It is the only
//! place that:
//! - Parses arguments (`setup.rs`)
//! - Wires the API with config, profile and message catalog (`commands.rs`)
//! - Writes to stdout/stderr and picks exit codes (`commands.rs`)
//! - Formats results for humans (`render.rs`)
//!
//! Rejected input (a duplicate key, an empty value) is not a program error:
//! the messages are printed and the process exits with status 1.

mod commands;
mod render;
mod setup;

pub use commands::run;
