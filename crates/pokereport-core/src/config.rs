//! Configuration for pokereport.
//!
//! Configuration is read from a TOML file (by default
//! `<config dir>/pokereport/config.toml`), then overridden by environment
//! variables. A missing file is not an error; defaults apply.
//!
//! ```toml
//! [pokeapi]
//! base_url = "https://pokeapi.co/api/v2"
//!
//! [translate]
//! endpoint = "https://translation.googleapis.com/v3"
//! project_id = "your-project-id"
//! location = "global"
//! access_token = ""
//!
//! [report]
//! creature = "pikachu"
//! target_language = "fr"
//! output = "pokemon_report.pdf"
//! html_path = "report_template.html"
//!
//! [renderer]
//! wkhtmltopdf = "wkhtmltopdf"
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Overrides `pokeapi.base_url`.
pub const ENV_POKEAPI_BASE_URL: &str = "POKEREPORT_POKEAPI_BASE_URL";
/// Overrides `translate.endpoint`.
pub const ENV_TRANSLATE_ENDPOINT: &str = "POKEREPORT_TRANSLATE_ENDPOINT";
/// Overrides `translate.project_id`.
pub const ENV_TRANSLATE_PROJECT_ID: &str = "POKEREPORT_TRANSLATE_PROJECT_ID";
/// Fallback for `translate.project_id`.
pub const ENV_GOOGLE_CLOUD_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";
/// Overrides `translate.location`.
pub const ENV_TRANSLATE_LOCATION: &str = "POKEREPORT_TRANSLATE_LOCATION";
/// Overrides `translate.access_token`.
pub const ENV_TRANSLATE_ACCESS_TOKEN: &str = "POKEREPORT_TRANSLATE_ACCESS_TOKEN";
/// Fallback for `translate.access_token`.
pub const ENV_GOOGLE_OAUTH_ACCESS_TOKEN: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";
/// Overrides `renderer.wkhtmltopdf`.
pub const ENV_WKHTMLTOPDF: &str = "POKEREPORT_WKHTMLTOPDF";

/// Behaviour shared by configuration types that live in a TOML file.
pub trait ConfigManager: Default + Serialize + DeserializeOwned {
    /// Name used for the config directory and in user-facing hints.
    fn project_name() -> &'static str;

    /// Platform default location of the config file.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// An explicit path wins over the platform default.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Loads the configuration, falling back to defaults when no file exists.
    fn load(config_path: Option<&str>) -> Result<Self>;

    /// Serializes the configuration as pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Environment variables that reproduce this configuration.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>>;
}

/// Creature lookup service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokeApiSettings {
    /// API root, without trailing slash
    pub base_url: String,
}

impl Default for PokeApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
        }
    }
}

/// Translation service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateSettings {
    /// API root, without trailing slash
    pub endpoint: String,
    /// Cloud project that owns the translation quota
    pub project_id: String,
    /// Resource location; `global` unless a regional model is needed
    pub location: String,
    /// OAuth2 bearer token; empty means unauthenticated
    pub access_token: String,
}

impl Default for TranslateSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://translation.googleapis.com/v3".to_string(),
            project_id: "your-project-id".to_string(),
            location: "global".to_string(),
            access_token: String::new(),
        }
    }
}

/// What to report on and where to put it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Creature to look up
    pub creature: String,
    /// Language to translate the creature name into
    pub target_language: String,
    /// Destination PDF
    pub output: PathBuf,
    /// Where the intermediate HTML is written
    pub html_path: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            creature: "pikachu".to_string(),
            target_language: "fr".to_string(),
            output: PathBuf::from("pokemon_report.pdf"),
            html_path: PathBuf::from("report_template.html"),
        }
    }
}

/// HTML-to-PDF converter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    /// Path to (or name on `PATH` of) the `wkhtmltopdf` executable
    pub wkhtmltopdf: PathBuf,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            wkhtmltopdf: PathBuf::from("wkhtmltopdf"),
        }
    }
}

/// Top-level pokereport configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Creature lookup service
    pub pokeapi: PokeApiSettings,
    /// Translation service
    pub translate: TranslateSettings,
    /// Report request defaults
    pub report: ReportSettings,
    /// PDF converter
    pub renderer: RendererSettings,
}

impl ReportConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid configuration: {e}")))
    }

    /// Reads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Applies environment overrides using `lookup` to read variables.
    ///
    /// Empty values are treated as unset.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(v) = get(ENV_POKEAPI_BASE_URL) {
            self.pokeapi.base_url = v;
        }
        if let Some(v) = get(ENV_TRANSLATE_ENDPOINT) {
            self.translate.endpoint = v;
        }
        if let Some(v) = get(ENV_TRANSLATE_PROJECT_ID).or_else(|| get(ENV_GOOGLE_CLOUD_PROJECT)) {
            self.translate.project_id = v;
        }
        if let Some(v) = get(ENV_TRANSLATE_LOCATION) {
            self.translate.location = v;
        }
        if let Some(v) =
            get(ENV_TRANSLATE_ACCESS_TOKEN).or_else(|| get(ENV_GOOGLE_OAUTH_ACCESS_TOKEN))
        {
            self.translate.access_token = v;
        }
        if let Some(v) = get(ENV_WKHTMLTOPDF) {
            self.renderer.wkhtmltopdf = PathBuf::from(v);
        }
    }

    /// Checks that every value the pipeline needs is present.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("pokeapi.base_url", self.pokeapi.base_url.as_str()),
            ("translate.endpoint", self.translate.endpoint.as_str()),
            ("translate.project_id", self.translate.project_id.as_str()),
            ("translate.location", self.translate.location.as_str()),
            ("report.creature", self.report.creature.as_str()),
            ("report.target_language", self.report.target_language.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::validation_field(field, "must not be empty"));
            }
        }
        if self.report.output.as_os_str().is_empty() {
            return Err(Error::validation_field("report.output", "must not be empty"));
        }
        if self.report.html_path.as_os_str().is_empty() {
            return Err(Error::validation_field(
                "report.html_path",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

impl ConfigManager for ReportConfig {
    fn project_name() -> &'static str {
        "pokereport"
    }

    fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(config_path) {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "Loading configuration");
                Self::from_file(&path)?
            }
            Some(path) => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let mut vars = vec![
            (ENV_POKEAPI_BASE_URL.to_string(), self.pokeapi.base_url.clone()),
            (ENV_TRANSLATE_ENDPOINT.to_string(), self.translate.endpoint.clone()),
            (
                ENV_TRANSLATE_PROJECT_ID.to_string(),
                self.translate.project_id.clone(),
            ),
            (ENV_TRANSLATE_LOCATION.to_string(), self.translate.location.clone()),
            (
                ENV_WKHTMLTOPDF.to_string(),
                self.renderer.wkhtmltopdf.display().to_string(),
            ),
        ];
        if !self.translate.access_token.is_empty() {
            vars.push((
                ENV_TRANSLATE_ACCESS_TOKEN.to_string(),
                self.translate.access_token.clone(),
            ));
        }
        Ok(vars)
    }
}
