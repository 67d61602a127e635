//! Test utilities for backend sources
//!
//! In-memory stand-ins for [`MetadataSource`] and [`StrokeSource`] that record
//! the requests they receive.

use std::sync::Mutex;

use hanzi_core::{CharacterFields, Error, Result, StrokeData};

use crate::metadata::MetadataSource;
use crate::strokes::StrokeSource;

/// Metadata source returning canned fields, or failing when none are set
#[derive(Debug, Default)]
pub struct StubMetadataSource {
    fields: Option<CharacterFields>,
    requests: Mutex<Vec<String>>,
}

impl StubMetadataSource {
    pub fn succeeding(fields: CharacterFields) -> Self {
        Self {
            fields: Some(fields),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    /// Characters requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl MetadataSource for StubMetadataSource {
    async fn fetch_fields(&self, character: &str) -> Result<CharacterFields> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(character.to_string());
        }
        self.fields
            .clone()
            .ok_or_else(|| Error::backend("stub metadata source failure"))
    }
}

/// Stroke source serving one JSON document for every character
#[derive(Debug, Default)]
pub struct StubStrokeSource {
    json: Option<String>,
    requests: Mutex<Vec<char>>,
}

impl StubStrokeSource {
    pub fn serving(json: impl Into<String>) -> Self {
        Self {
            json: Some(json.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<char> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl StrokeSource for StubStrokeSource {
    async fn load(&self, character: char) -> Result<StrokeData> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(character);
        }
        match &self.json {
            Some(json) => StrokeData::from_json(json),
            None => Err(Error::http("stub stroke source failure")),
        }
    }
}

/// Fields for 猫, as the backend would return them
pub fn cat_fields() -> CharacterFields {
    CharacterFields {
        pinyin: "māo".to_string(),
        definition: "cat".to_string(),
        example_sentence: "我有一只猫。".to_string(),
        example_sentence_meaning: "I have a cat.".to_string(),
    }
}

/// Minimal two-stroke document (a plus sign), in source coordinates
pub const PLUS_STROKES_JSON: &str = r#"{
    "strokes": [
        "M 112 612 L 912 612 L 912 552 L 112 552 Z",
        "M 482 850 L 542 850 L 542 50 L 482 50 Z"
    ],
    "medians": [
        [[132, 582], [892, 582]],
        [[512, 830], [512, 70]]
    ]
}"#;
