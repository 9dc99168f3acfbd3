// csvboy/src/lib.rs
//! # csvboy CLI Application
//!
//! This crate provides the command-line front end for `csvboy-core`: argument
//! parsing, logging setup, and the terminal rendering of results.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
