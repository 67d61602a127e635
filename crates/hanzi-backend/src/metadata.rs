//! Character metadata from the Gemini `generateContent` API
//!
//! The backend is asked for a strictly-typed JSON object (pinyin, definition,
//! example sentence, translation). Any failure on the way is logged and
//! replaced by placeholder data, so callers only ever see an error for empty
//! input.

use std::time::Duration;

use hanzi_core::prelude::*;
use hanzi_core::{CharacterData, CharacterFields};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Default API root for the generative backend
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model name
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest slice of an error body kept in log messages
const MAX_ERROR_BODY: usize = 200;

/// Source of character metadata
///
/// The shell only needs the four backend fields; [`fetch_character_metadata`]
/// wraps them with the requested character and applies the fallback policy.
#[trait_variant::make(MetadataSource: Send)]
pub trait LocalMetadataSource {
    /// Ask the backend about a single character
    async fn fetch_fields(&self, character: &str) -> Result<CharacterFields>;
}

/// Look up metadata for one character.
///
/// Fails only when `character` is empty. Every backend failure is logged and
/// turned into [`CharacterData::fallback`].
pub async fn fetch_character_metadata<S>(source: &S, character: &str) -> Result<CharacterData>
where
    S: MetadataSource + Sync,
{
    if character.is_empty() {
        return Err(Error::invalid_input("character must not be empty"));
    }

    match source.fetch_fields(character).await {
        Ok(fields) => {
            debug!("Metadata for '{}': {}", character, fields.pinyin);
            Ok(CharacterData::from_fields(character, fields))
        }
        Err(e) => {
            warn!("Metadata lookup for '{}' failed, using fallback: {}", character, e);
            Ok(CharacterData::fallback(character))
        }
    }
}

/// Instruction sent to the backend for `character`
pub fn build_prompt(character: &str) -> String {
    format!(
        "Analyze the single Chinese character: \"{character}\". Provide its Pinyin (with tone marks), \
         a concise English definition, a simple Chinese example sentence using this character, \
         and the English translation of that sentence."
    )
}

/// Connection settings for [`GeminiClient`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Gemini REST client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

// ─────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Schema the backend must follow: four required string fields
fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "pinyin": { "type": "STRING", "description": "Pinyin with tone marks" },
            "definition": { "type": "STRING", "description": "Concise English definition" },
            "exampleSentence": { "type": "STRING", "description": "A simple Chinese sentence using the character" },
            "exampleSentenceMeaning": { "type": "STRING", "description": "English translation of the sentence" }
        },
        "required": ["pinyin", "definition", "exampleSentence", "exampleSentenceMeaning"]
    })
}

fn build_request(character: &str) -> GenerateRequest {
    GenerateRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart {
                text: build_prompt(character),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: response_schema(),
        },
    }
}

/// Extract the four fields from a `generateContent` response body
fn parse_generate_response(body: &str) -> Result<CharacterFields> {
    let response: GenerateResponse = serde_json::from_str(body)?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| Error::backend("response contained no text"))?;

    Ok(serde_json::from_str(text.trim())?)
}

fn truncate(body: &str) -> &str {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.is_none() {
            warn!("No Gemini API key configured; metadata lookups will use fallback data");
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl MetadataSource for GeminiClient {
    async fn fetch_fields(&self, character: &str) -> Result<CharacterFields> {
        let url = self.endpoint();
        debug!("Requesting metadata for '{}' from {}", character, url);

        let mut request = self.http.post(&url).json(&build_request(character));
        if let Some(key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::http(format!("HTTP {}: {}", status, truncate(&body))));
        }

        parse_generate_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StubMetadataSource;

    fn fields() -> CharacterFields {
        CharacterFields {
            pinyin: "māo".into(),
            definition: "cat".into(),
            example_sentence: "我有一只猫。".into(),
            example_sentence_meaning: "I have a cat.".into(),
        }
    }

    #[test]
    fn test_prompt_embeds_character() {
        let prompt = build_prompt("猫");
        assert!(prompt.starts_with("Analyze the single Chinese character: \"猫\"."));
        assert!(prompt.contains("Pinyin (with tone marks)"));
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(build_request("水")).unwrap();
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("\"水\""));

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "OBJECT");
        let required = config["responseSchema"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);
        assert!(required.contains(&json!("exampleSentenceMeaning")));
    }

    #[test]
    fn test_parse_response_reads_first_candidate_text() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "{\"pinyin\":\"māo\",\"definition\":\"cat\",\"exampleSentence\":\"我有一只猫。\",\"exampleSentenceMeaning\":\"I have a cat.\"}"
                    }]
                }
            }]
        })
        .to_string();
        assert_eq!(parse_generate_response(&body).unwrap(), fields());
    }

    #[test]
    fn test_parse_response_without_candidates_fails() {
        assert!(parse_generate_response(r#"{"candidates": []}"#).is_err());
        assert!(parse_generate_response(r#"{}"#).is_err());
    }

    #[test]
    fn test_parse_response_with_empty_text_fails() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#;
        let err = parse_generate_response(body).unwrap_err();
        assert!(matches!(err, Error::Backend { .. }));
    }

    #[test]
    fn test_parse_response_with_missing_field_fails() {
        let body = json!({
            "candidates": [{"content": {"parts": [{"text": "{\"pinyin\":\"māo\"}"}]}}]
        })
        .to_string();
        assert!(matches!(
            parse_generate_response(&body).unwrap_err(),
            Error::Json(_)
        ));
    }

    #[test]
    fn test_parse_response_with_non_json_text_fails() {
        let body = json!({
            "candidates": [{"content": {"parts": [{"text": "Sorry, I can't help."}]}}]
        })
        .to_string();
        assert!(parse_generate_response(&body).is_err());
    }

    #[test]
    fn test_endpoint_joins_base_and_model() {
        let client = GeminiClient::new(GeminiConfig {
            base_url: "https://example.test/v1beta/".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let long = "猫".repeat(MAX_ERROR_BODY + 10);
        assert_eq!(truncate(&long).chars().count(), MAX_ERROR_BODY);
        assert_eq!(truncate("short"), "short");
    }

    #[tokio::test]
    async fn test_fetch_wraps_fields_with_character() {
        let source = StubMetadataSource::succeeding(fields());
        let data = fetch_character_metadata(&source, "猫").await.unwrap();
        assert_eq!(data.char, "猫");
        assert_eq!(data.pinyin, "māo");
        assert_eq!(source.requests(), vec!["猫".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_fallback() {
        let source = StubMetadataSource::failing();
        let data = fetch_character_metadata(&source, "猫").await.unwrap();
        assert_eq!(data, CharacterData::fallback("猫"));
    }

    #[tokio::test]
    async fn test_fetch_empty_input_is_rejected_without_calling_backend() {
        let source = StubMetadataSource::succeeding(fields());
        let err = fetch_character_metadata(&source, "").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_only_guards_the_empty_string() {
        let source = StubMetadataSource::succeeding(fields());
        let data = fetch_character_metadata(&source, " ").await.unwrap();
        assert_eq!(data.char, " ");
        assert_eq!(source.requests(), vec![" ".to_string()]);
    }

    #[tokio::test]
    async fn test_unreachable_backend_yields_fallback() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: Some("test-key".into()),
            base_url: "http://127.0.0.1:9".into(),
            timeout: Duration::from_secs(2),
            ..Default::default()
        })
        .unwrap();
        let data = fetch_character_metadata(&client, "水").await.unwrap();
        assert!(data.is_fallback());
        assert_eq!(data.char, "水");
    }
}
