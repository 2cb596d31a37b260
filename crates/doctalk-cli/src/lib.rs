//! doctalk-cli library root.
//!
//! Exposes configuration and terminal rendering so integration tests can
//! exercise them without driving stdin.

pub mod config;
pub mod terminal;
