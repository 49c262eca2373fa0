#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Pokereport Library
//!
//! Report workflow, command-line definitions, and config handlers.

pub mod cli;
pub mod config_handlers;
pub mod workflow;

// Re-export core types
pub use pokereport_core::{Error, Result};
pub use workflow::{ReportOutcome, ReportRequest, ReportWorkflow, failure_hint};
