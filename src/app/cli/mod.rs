//! CLI module containing argument parsing, configuration and output rendering

pub mod args;
pub mod config;
pub mod display;
