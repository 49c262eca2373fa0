//! HTML-to-PDF conversion.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use pokereport_core::config::RendererSettings;
use pokereport_core::{Error, Result};

/// Arguments passed to `wkhtmltopdf` ahead of the input and output paths.
pub const DEFAULT_ARGS: &[&str] = &[
    "--quiet",
    "--encoding",
    "UTF-8",
    "--enable-local-file-access",
];

/// Converts an HTML file into a PDF file.
#[async_trait]
pub trait PdfConverter: Send + Sync {
    /// Renders `html` into a PDF written at `output`.
    async fn convert(&self, html: &Path, output: &Path) -> Result<()>;
}

/// Fixed converter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    /// Executable to run
    pub wkhtmltopdf: PathBuf,
    /// Arguments placed before the input and output paths
    pub args: Vec<String>,
}

impl RendererConfig {
    /// Uses `executable` with the default argument list.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            wkhtmltopdf: executable.into(),
            args: DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Builds the configuration from settings.
    pub fn from_settings(settings: &RendererSettings) -> Self {
        Self::new(settings.wkhtmltopdf.clone())
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::new("wkhtmltopdf")
    }
}

/// [`PdfConverter`] that shells out to `wkhtmltopdf`.
#[derive(Debug, Clone, Default)]
pub struct WkHtmlToPdf {
    config: RendererConfig,
}

impl WkHtmlToPdf {
    /// Creates a converter with the given configuration.
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    fn command(&self, html: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.config.wkhtmltopdf);
        cmd.args(&self.config.args).arg(html).arg(output);
        cmd.kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl PdfConverter for WkHtmlToPdf {
    async fn convert(&self, html: &Path, output: &Path) -> Result<()> {
        let executable = self.config.wkhtmltopdf.display().to_string();
        tracing::debug!(
            converter = %executable,
            html = %html.display(),
            output = %output.display(),
            "Converting HTML to PDF"
        );

        let result = self.command(html, output).output().await.map_err(|e| {
            Error::render_with_source(format!("failed to run {executable}"), e)
        })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::render(format!(
                "{executable} exited with {}: {}",
                result.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
