//! Name translation via the Cloud Translation v3 API.
//!
//! [`CloudTranslator`] implements [`NameTranslator`] on top of any
//! [`TranslationClient`]. [`HttpTranslationClient`] is the REST transport;
//! tests swap in their own client to observe the exact request.

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use pokereport_core::config::TranslateSettings;
use pokereport_core::{Error, NameTranslator, Result};

use crate::http::{api_error, endpoint_url};

/// Public Cloud Translation v3 root.
pub const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com/v3";

/// Location used when no regional model is requested.
pub const DEFAULT_LOCATION: &str = "global";

/// Body of a `translateText` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextRequest {
    /// Resource the call is made against (`projects/{p}/locations/{l}`)
    #[serde(skip)]
    pub parent: String,
    /// Texts to translate
    pub contents: Vec<String>,
    /// BCP-47 code of the target language
    pub target_language_code: String,
    /// Source language; detected by the service when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    /// Format of `contents`
    pub mime_type: String,
}

/// One translated text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// The translation
    pub translated_text: String,
    /// Source language as detected by the service
    #[serde(default)]
    pub detected_language_code: Option<String>,
}

/// Response of a `translateText` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TranslateTextResponse {
    /// One entry per input text, in input order
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// Transport for the translation service.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Resource name of a project location.
    fn location_path(&self, project_id: &str, location: &str) -> String {
        format!("projects/{project_id}/locations/{location}")
    }

    /// Performs one `translateText` call.
    async fn translate_text(&self, request: TranslateTextRequest) -> Result<TranslateTextResponse>;
}

/// REST [`TranslationClient`].
#[derive(Debug, Clone)]
pub struct HttpTranslationClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl HttpTranslationClient {
    /// Creates a client for the API rooted at `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            access_token: None,
        }
    }

    /// Sends `token` as a bearer credential on every call.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.access_token = if token.is_empty() { None } else { Some(token) };
        self
    }

    /// `{endpoint}/projects/{p}/locations/{l}:translateText`, with the project and
    /// location percent-encoded as single path segments.
    fn method_url(&self, parent: &str) -> Result<Url> {
        let segments: Vec<&str> = parent.split('/').collect();
        let ["projects", project, "locations", location] = segments.as_slice() else {
            return Err(Error::validation_field(
                "parent",
                format!("expected 'projects/{{project}}/locations/{{location}}', got '{parent}'"),
            ));
        };
        if project.is_empty() || location.is_empty() {
            return Err(Error::validation_field(
                "parent",
                format!("project and location must not be empty in '{parent}'"),
            ));
        }

        let method = format!("{location}:translateText");
        endpoint_url(
            &self.endpoint,
            &["projects", *project, "locations", method.as_str()],
        )
    }
}

#[async_trait]
impl TranslationClient for HttpTranslationClient {
    async fn translate_text(&self, request: TranslateTextRequest) -> Result<TranslateTextResponse> {
        let url = self.method_url(&request.parent)?;
        tracing::debug!(url = %url, target = %request.target_language_code, "Calling translateText");

        let mut builder = self.http.post(url).json(&request);
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(api_error("translate", response).await);
        }

        Ok(response.json().await?)
    }
}

/// [`NameTranslator`] backed by the Cloud Translation API.
#[derive(Debug, Clone)]
pub struct CloudTranslator<C = HttpTranslationClient> {
    client: C,
    project_id: String,
    location: String,
}

impl CloudTranslator<HttpTranslationClient> {
    /// Creates a translator over HTTP from configuration.
    pub fn from_settings(settings: &TranslateSettings) -> Self {
        let client = HttpTranslationClient::new(settings.endpoint.clone())
            .with_access_token(settings.access_token.clone());
        Self::new(client, settings.project_id.clone()).with_location(settings.location.clone())
    }
}

impl<C: TranslationClient> CloudTranslator<C> {
    /// Creates a translator for `project_id` in the `global` location.
    pub fn new(client: C, project_id: impl Into<String>) -> Self {
        Self {
            client,
            project_id: project_id.into(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }

    /// Uses a regional location instead of `global`.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// The underlying transport.
    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C: TranslationClient> NameTranslator for CloudTranslator<C> {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let request = TranslateTextRequest {
            parent: self.client.location_path(&self.project_id, &self.location),
            contents: vec![text.to_string()],
            target_language_code: target_language.to_string(),
            source_language_code: None,
            mime_type: "text/plain".to_string(),
        };

        let response = self.client.translate_text(request).await?;
        let first = response
            .translations
            .into_iter()
            .next()
            .ok_or(Error::EmptyTranslation)?;

        tracing::info!(
            source = %text,
            target_language = %target_language,
            translated = %first.translated_text,
            detected = first.detected_language_code.as_deref().unwrap_or("-"),
            "Name translated"
        );
        Ok(first.translated_text)
    }
}
