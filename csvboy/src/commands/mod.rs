// csvboy/src/commands/mod.rs
//! Command implementations for the csvboy CLI.

pub mod sanitize;
