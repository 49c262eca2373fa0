//! Common test utilities and harness for pokereport integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pokereport::ReportWorkflow;
use pokereport_core::mock::{MockCreatureLookup, MockNameTranslator, MockReportGenerator};
use pokereport_core::{Creature, Result};
use pokereport_render::PdfConverter;

/// Test harness holding one recording double per stage.
pub struct TestHarness {
    /// Lookup double
    pub lookup: Arc<MockCreatureLookup>,
    /// Translator double
    pub translator: Arc<MockNameTranslator>,
    /// Report generator double
    pub generator: Arc<MockReportGenerator>,
}

impl TestHarness {
    /// Harness whose stages all succeed.
    pub fn new(creature: Creature, translation: &str) -> Self {
        Self {
            lookup: Arc::new(MockCreatureLookup::with_creature(creature)),
            translator: Arc::new(MockNameTranslator::with_response(translation)),
            generator: Arc::new(MockReportGenerator::new()),
        }
    }

    /// Replaces the lookup double.
    pub fn with_lookup(mut self, lookup: MockCreatureLookup) -> Self {
        self.lookup = Arc::new(lookup);
        self
    }

    /// Replaces the translator double.
    pub fn with_translator(mut self, translator: MockNameTranslator) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    /// Replaces the generator double.
    pub fn with_generator(mut self, generator: MockReportGenerator) -> Self {
        self.generator = Arc::new(generator);
        self
    }

    /// Workflow wired to the doubles.
    pub fn workflow(&self) -> ReportWorkflow {
        ReportWorkflow::new(
            self.lookup.clone(),
            self.translator.clone(),
            self.generator.clone(),
        )
    }
}

/// The partial record used by the default-run tests.
pub fn pikachu_stub() -> Creature {
    Creature::new("pikachu").with_type("electric")
}

/// A complete pikachu record.
pub fn pikachu_full() -> Creature {
    Creature::new("pikachu")
        .with_type("electric")
        .with_measurements(4, 60)
        .with_ability("static")
        .with_ability("lightning-rod")
}

/// PokeAPI response body for pikachu.
pub fn pikachu_json() -> serde_json::Value {
    serde_json::json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "types": [{"slot": 1, "type": {"name": "electric"}}],
        "abilities": [
            {"ability": {"name": "static"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "lightning-rod"}, "is_hidden": true, "slot": 3}
        ]
    })
}

/// Converter double that writes a placeholder PDF and records what it saw.
#[derive(Default)]
pub struct FakePdfConverter {
    /// `(html path, output path, html content)` per call
    pub calls: Mutex<Vec<(PathBuf, PathBuf, String)>>,
}

#[async_trait]
impl PdfConverter for FakePdfConverter {
    async fn convert(&self, html: &Path, output: &Path) -> Result<()> {
        let content = tokio::fs::read_to_string(html).await?;
        tokio::fs::write(output, b"%PDF-1.4\n%%EOF\n").await?;
        self.calls
            .lock()
            .unwrap()
            .push((html.to_path_buf(), output.to_path_buf(), content));
        Ok(())
    }
}
