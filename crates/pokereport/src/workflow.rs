//! The fetch → translate → render pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use pokereport_clients::{CloudTranslator, PokeApiClient};
use pokereport_core::{
    Creature, CreatureLookup, Error, NameTranslator, ReportConfig, ReportGenerator, Result,
    RunId,
};
use pokereport_render::PdfReportGenerator;

/// Creature reported on when nothing else is requested.
pub const DEFAULT_CREATURE: &str = "pikachu";

/// Language the name is translated into when nothing else is requested.
pub const DEFAULT_TARGET_LANGUAGE: &str = "fr";

/// PDF written when nothing else is requested.
pub const DEFAULT_OUTPUT: &str = "pokemon_report.pdf";

/// Input for one report run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Unique ID for this run
    pub run_id: RunId,

    /// Creature to look up
    pub creature: String,

    /// Language to translate the creature name into
    pub target_language: String,

    /// Destination PDF
    pub output: PathBuf,
}

impl ReportRequest {
    /// Creates a request with a fresh run ID.
    pub fn new(
        creature: impl Into<String>,
        target_language: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            run_id: RunId::new(),
            creature: creature.into(),
            target_language: target_language.into(),
            output: output.into(),
        }
    }

    /// Creates a request from the `[report]` section of the configuration.
    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(
            config.report.creature.clone(),
            config.report.target_language.clone(),
            config.report.output.clone(),
        )
    }
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self::new(DEFAULT_CREATURE, DEFAULT_TARGET_LANGUAGE, DEFAULT_OUTPUT)
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutcome {
    /// Run that produced this outcome
    pub run_id: RunId,

    /// Record fetched in step 1
    pub creature: Creature,

    /// Name produced in step 2
    pub translated_name: String,

    /// PDF written in step 3
    pub output: PathBuf,
}

/// Runs the three report stages in order.
///
/// Each stage is awaited before the next starts; the first failure ends the
/// run and is returned unchanged.
#[derive(Clone)]
pub struct ReportWorkflow {
    lookup: Arc<dyn CreatureLookup>,
    translator: Arc<dyn NameTranslator>,
    generator: Arc<dyn ReportGenerator>,
}

impl ReportWorkflow {
    /// Creates a workflow from its three stages.
    pub fn new(
        lookup: Arc<dyn CreatureLookup>,
        translator: Arc<dyn NameTranslator>,
        generator: Arc<dyn ReportGenerator>,
    ) -> Self {
        Self {
            lookup,
            translator,
            generator,
        }
    }

    /// Wires the production stages (PokeAPI, Cloud Translation, wkhtmltopdf).
    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(
            Arc::new(PokeApiClient::from_settings(&config.pokeapi)),
            Arc::new(CloudTranslator::from_settings(&config.translate)),
            Arc::new(PdfReportGenerator::from_config(config)),
        )
    }

    /// Runs fetch → translate → render for `request`.
    pub async fn run(&self, request: ReportRequest) -> Result<ReportOutcome> {
        tracing::info!(
            run_id = %request.run_id,
            creature = %request.creature,
            target_language = %request.target_language,
            "Starting report"
        );

        // Step 1: Fetch the creature record
        let creature = self.fetch_step(&request.creature).await?;

        // Step 2: Translate its name
        let translated_name = self
            .translate_step(&creature.name, &request.target_language)
            .await?;

        // Step 3: Render the report
        self.render_step(&creature, &translated_name, &request)
            .await?;

        tracing::info!(
            run_id = %request.run_id,
            output = %request.output.display(),
            "Report completed"
        );

        Ok(ReportOutcome {
            run_id: request.run_id,
            creature,
            translated_name,
            output: request.output,
        })
    }

    async fn fetch_step(&self, name: &str) -> Result<Creature> {
        tracing::info!(creature = %name, "Fetching creature info");
        self.lookup.get_creature_info(name).await
    }

    async fn translate_step(&self, name: &str, target_language: &str) -> Result<String> {
        tracing::info!(name = %name, target_language = %target_language, "Translating name");
        self.translator.translate(name, target_language).await
    }

    async fn render_step(
        &self,
        creature: &Creature,
        translated_name: &str,
        request: &ReportRequest,
    ) -> Result<()> {
        tracing::info!(output = %request.output.display(), "Rendering report");
        self.generator
            .generate_report(creature, translated_name, &request.output)
            .await
    }
}

/// What to check after a failed run, when there is something specific.
pub fn failure_hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::CreatureNotFound { .. } => Some("check the creature name or id"),
        Error::Render { .. } => {
            Some("check that `[renderer] wkhtmltopdf` points at a working executable")
        }
        Error::Config { .. } | Error::Validation { .. } => {
            Some("run `pokereport config path` to find the configuration file")
        }
        e if e.is_remote() => Some(
            "check network access, `[pokeapi] base_url`, `[translate]` project and access token",
        ),
        _ => None,
    }
}
