//! Stroke geometry from the `hanzi-writer-data` set

use std::time::Duration;

use hanzi_core::prelude::*;
use hanzi_core::StrokeData;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use url::Url;

/// Where stroke documents are fetched from; `{char}` is replaced by the
/// percent-encoded character
pub const DEFAULT_STROKE_URL_TEMPLATE: &str =
    "https://cdn.jsdelivr.net/npm/hanzi-writer-data@2.0/{char}.json";

/// Placeholder substituted in the URL template
const CHAR_PLACEHOLDER: &str = "{char}";

/// Source of stroke geometry, keyed by character
#[trait_variant::make(StrokeSource: Send)]
pub trait LocalStrokeSource {
    async fn load(&self, character: char) -> Result<StrokeData>;
}

/// Fetches stroke documents over HTTP
#[derive(Debug, Clone)]
pub struct HttpStrokeSource {
    http: reqwest::Client,
    url_template: String,
}

impl HttpStrokeSource {
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url_template = url_template.into();
        if !url_template.contains(CHAR_PLACEHOLDER) {
            return Err(Error::config(format!(
                "stroke URL template '{url_template}' has no {CHAR_PLACEHOLDER} placeholder"
            )));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, url_template })
    }

    /// URL of the document for `character`
    pub fn url_for(&self, character: char) -> Result<Url> {
        let mut buf = [0u8; 4];
        let encoded =
            utf8_percent_encode(character.encode_utf8(&mut buf), NON_ALPHANUMERIC).to_string();
        let raw = self.url_template.replace(CHAR_PLACEHOLDER, &encoded);
        Url::parse(&raw).map_err(|e| Error::config(format!("invalid stroke URL '{raw}': {e}")))
    }
}

impl StrokeSource for HttpStrokeSource {
    async fn load(&self, character: char) -> Result<StrokeData> {
        let url = self.url_for(character)?;
        debug!("Loading strokes for '{}' from {}", character, url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(format!(
                "HTTP {status} loading strokes for '{character}'"
            )));
        }
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        StrokeData::from_json(&body)
            .map_err(|e| Error::stroke_data(character.to_string(), e.to_string()))
    }
}
