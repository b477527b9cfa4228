//! CLI tooling.

pub mod cli;
