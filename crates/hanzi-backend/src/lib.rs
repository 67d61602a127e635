//! # hanzi-backend - Remote Data Sources
//!
//! Fetches everything the board needs from the network: pedagogical metadata
//! from a generative-language backend and stroke geometry from the
//! `hanzi-writer-data` set.
//!
//! Depends on [`hanzi_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Metadata
//! - [`MetadataSource`] - Async seam for metadata lookups (Send variant)
//! - [`GeminiClient`] - Production implementation over the Gemini REST API
//! - [`fetch_character_metadata()`] - Lookup with the fallback policy applied
//!
//! ### Strokes
//! - [`StrokeSource`] - Async seam for stroke geometry (Send variant)
//! - [`HttpStrokeSource`] - Loads `{char}.json` documents from a URL template

pub mod metadata;
pub mod strokes;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use metadata::{
    build_prompt, fetch_character_metadata, GeminiClient, GeminiConfig, LocalMetadataSource,
    MetadataSource, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
pub use strokes::{HttpStrokeSource, LocalStrokeSource, StrokeSource, DEFAULT_STROKE_URL_TEMPLATE};
