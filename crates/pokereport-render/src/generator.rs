//! Report generation: template, materialize, convert, clean up.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use pokereport_core::{Creature, Error, ReportConfig, ReportGenerator, Result};

use crate::html::render_html;
use crate::pdf::{PdfConverter, RendererConfig, WkHtmlToPdf};

/// [`ReportGenerator`] that writes an HTML page and converts it to PDF.
#[derive(Debug, Clone)]
pub struct PdfReportGenerator<C = WkHtmlToPdf> {
    html_path: PathBuf,
    converter: C,
}

impl PdfReportGenerator<WkHtmlToPdf> {
    /// Builds a `wkhtmltopdf`-backed generator from configuration.
    pub fn from_config(config: &ReportConfig) -> Self {
        let converter = WkHtmlToPdf::new(RendererConfig::from_settings(&config.renderer));
        Self::new(converter, config.report.html_path.clone())
    }
}

impl<C: PdfConverter> PdfReportGenerator<C> {
    /// Creates a generator that writes its HTML to `html_path`.
    pub fn new(converter: C, html_path: impl Into<PathBuf>) -> Self {
        Self {
            html_path: html_path.into(),
            converter,
        }
    }

    /// Where the intermediate HTML is written.
    pub fn html_path(&self) -> &Path {
        &self.html_path
    }

    /// The converter in use.
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Renders the report page and writes it to [`Self::html_path`].
    ///
    /// Returns the path written. The caller owns the file from here on.
    pub async fn create_html_report(
        &self,
        creature: &Creature,
        translated_name: &str,
    ) -> Result<PathBuf> {
        let html = render_html(creature, translated_name);
        tokio::fs::write(&self.html_path, html)
            .await
            .map_err(|e| Error::io_with_path(e, &self.html_path))?;
        tracing::debug!(path = %self.html_path.display(), "HTML report written");
        Ok(self.html_path.clone())
    }
}

#[async_trait]
impl<C: PdfConverter> ReportGenerator for PdfReportGenerator<C> {
    async fn generate_report(
        &self,
        creature: &Creature,
        translated_name: &str,
        output: &Path,
    ) -> Result<()> {
        let html_path = self.create_html_report(creature, translated_name).await?;

        let converted = self.converter.convert(&html_path, output).await;

        // The HTML is an intermediate; a failed removal never masks the conversion result.
        if let Err(e) = tokio::fs::remove_file(&html_path).await {
            tracing::warn!(path = %html_path.display(), error = %e, "Could not remove HTML report");
        }

        converted?;
        tracing::info!(output = %output.display(), "PDF report generated");
        Ok(())
    }
}
