//! Command Line Interface (CLI) layer for ROMANCALC.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the report pipeline. It wires
//! user-provided options to the underlying library functionality exposed
//! via `romancalc::api`.
//!
//! If you are embedding ROMANCALC into another application, prefer using
//! the high-level `romancalc::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
