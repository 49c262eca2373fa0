//! Stage seams for the report pipeline.
//!
//! Each stage wraps one external capability. Implementations live in
//! `pokereport-clients` and `pokereport-render`; recording doubles live in
//! [`crate::mock`].

use std::path::Path;

use async_trait::async_trait;

use crate::{Creature, Result};

/// Looks up a creature's attributes by name.
#[async_trait]
pub trait CreatureLookup: Send + Sync {
    /// Fetches the creature record for `name`.
    ///
    /// Fails with [`crate::Error::CreatureNotFound`] when the service does not
    /// know the name; any other remote failure is surfaced as-is.
    async fn get_creature_info(&self, name: &str) -> Result<Creature>;
}

/// Translates a piece of text into a target language.
#[async_trait]
pub trait NameTranslator: Send + Sync {
    /// Returns the first translation of `text` into `target_language`
    /// (e.g. `"fr"`).
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;
}

/// Turns a creature record and its translated name into a report file.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Writes the report for `creature` to `output`.
    async fn generate_report(
        &self,
        creature: &Creature,
        translated_name: &str,
        output: &Path,
    ) -> Result<()>;
}
