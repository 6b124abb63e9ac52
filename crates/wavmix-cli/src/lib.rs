//! wavmix CLI library
//!
//! Command implementations and run configuration for the `wavmix` binary.

pub mod commands;
pub mod config;
