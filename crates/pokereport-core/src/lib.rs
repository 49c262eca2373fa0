#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Pokereport Core
//!
//! Types, stage traits, errors, and configuration shared by every pokereport
//! crate.

pub mod config;
pub mod error;
pub mod mock;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::{ConfigManager, ReportConfig};
pub use error::{Error, Result};
pub use traits::{CreatureLookup, NameTranslator, ReportGenerator};
pub use types::{AbilitySlot, Creature, NamedResource, RunId, TypeSlot};
