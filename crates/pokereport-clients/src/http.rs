//! URL building and error mapping shared by the HTTP clients.

use reqwest::Url;

use pokereport_core::{Error, Result};

/// Appends `segments` to the path of `base`, percent-encoding each one.
///
/// A segment containing `/`, `?`, `#` or `%` stays a single path segment.
pub(crate) fn endpoint_url(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url =
        Url::parse(base).map_err(|e| Error::config(format!("Invalid base URL '{base}': {e}")))?;
    url.path_segments_mut()
        .map_err(|()| Error::config(format!("Base URL '{base}' cannot take a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Builds an [`Error::Api`] from a non-success response, keeping its body.
pub(crate) async fn api_error(service: &'static str, response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    Error::Api {
        service,
        status,
        message: body_text(response.text().await),
    }
}

fn body_text(body: reqwest::Result<String>) -> String {
    match body {
        Ok(text) => text,
        Err(e) => format!("<failed to read response body: {e}>"),
    }
}
