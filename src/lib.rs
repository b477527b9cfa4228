//! Agentry: Agent Persona Registry
//!
//! A registry over a directory of agent persona documents. Each document
//! describes how an AI assistant should approach one category of engineering
//! task; this crate loads them once into an immutable lookup table and exposes
//! them through a library API and a small CLI.

pub mod agent;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod tooling;
