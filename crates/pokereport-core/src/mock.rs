//! Recording test doubles for the pipeline stages.
//!
//! Every double remembers the arguments it was called with so tests can
//! assert on exactly what the pipeline passed to each stage.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::{Creature, CreatureLookup, Error, NameTranslator, ReportGenerator, Result};

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Lookup double that answers every request with the same record.
#[derive(Debug)]
pub struct MockCreatureLookup {
    creature: Option<Creature>,
    calls: Mutex<Vec<String>>,
}

impl MockCreatureLookup {
    /// Answers every lookup with `creature`.
    pub fn with_creature(creature: Creature) -> Self {
        Self {
            creature: Some(creature),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answers every lookup with [`Error::CreatureNotFound`].
    pub fn not_found() -> Self {
        Self {
            creature: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Names looked up so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        locked(&self.calls).clone()
    }
}

#[async_trait]
impl CreatureLookup for MockCreatureLookup {
    async fn get_creature_info(&self, name: &str) -> Result<Creature> {
        locked(&self.calls).push(name.to_string());
        match &self.creature {
            Some(creature) => Ok(creature.clone()),
            None => Err(Error::CreatureNotFound {
                name: name.to_string(),
            }),
        }
    }
}

/// A single recorded translation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateCall {
    /// Text that was translated
    pub text: String,
    /// Requested target language
    pub target_language: String,
}

/// Translator double that returns a fixed translation.
#[derive(Debug)]
pub struct MockNameTranslator {
    response: Option<String>,
    calls: Mutex<Vec<TranslateCall>>,
}

impl MockNameTranslator {
    /// Answers every request with `translation`.
    pub fn with_response(translation: impl Into<String>) -> Self {
        Self {
            response: Some(translation.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answers every request with an HTTP 503 from the translation service.
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in call order.
    pub fn calls(&self) -> Vec<TranslateCall> {
        locked(&self.calls).clone()
    }
}

#[async_trait]
impl NameTranslator for MockNameTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        locked(&self.calls).push(TranslateCall {
            text: text.to_string(),
            target_language: target_language.to_string(),
        });
        self.response.clone().ok_or_else(|| Error::Api {
            service: "translate",
            status: 503,
            message: "service unavailable".to_string(),
        })
    }
}

/// A single recorded report request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateCall {
    /// Record the report was built from
    pub creature: Creature,
    /// Translated display name
    pub translated_name: String,
    /// Requested output path
    pub output: PathBuf,
}

/// Report generator double that records requests without writing anything.
#[derive(Debug, Default)]
pub struct MockReportGenerator {
    fail: bool,
    calls: Mutex<Vec<GenerateCall>>,
}

impl MockReportGenerator {
    /// Creates a generator that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator that always fails with a render error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in call order.
    pub fn calls(&self) -> Vec<GenerateCall> {
        locked(&self.calls).clone()
    }
}

#[async_trait]
impl ReportGenerator for MockReportGenerator {
    async fn generate_report(
        &self,
        creature: &Creature,
        translated_name: &str,
        output: &Path,
    ) -> Result<()> {
        locked(&self.calls).push(GenerateCall {
            creature: creature.clone(),
            translated_name: translated_name.to_string(),
            output: output.to_path_buf(),
        });
        if self.fail {
            return Err(Error::render("converter exited with status 1"));
        }
        Ok(())
    }
}
