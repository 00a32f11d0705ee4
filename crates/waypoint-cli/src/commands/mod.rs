//! Subcommand handlers

pub mod adapt;
pub mod config;
