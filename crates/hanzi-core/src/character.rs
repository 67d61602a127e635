//! Character metadata types and input validation

use serde::{Deserialize, Serialize};

/// First code point of the common Han range accepted as input
pub const CJK_RANGE_START: char = '\u{4e00}';

/// Last code point of the common Han range accepted as input
pub const CJK_RANGE_END: char = '\u{9fa5}';

/// Placeholder pinyin used when metadata could not be retrieved
pub const FALLBACK_PINYIN: &str = "Unknown";

/// Placeholder definition used when metadata could not be retrieved
pub const FALLBACK_DEFINITION: &str = "Could not retrieve definition.";

/// Returns true for characters in the common Han block (U+4E00..=U+9FA5).
pub fn is_cjk_ideograph(c: char) -> bool {
    (CJK_RANGE_START..=CJK_RANGE_END).contains(&c)
}

/// Take the first character of the trimmed input if it is a CJK ideograph.
///
/// Returns `None` for empty input or when the first character is outside the
/// accepted range. Only the first character matters; anything after it is
/// ignored.
pub fn first_ideograph(input: &str) -> Option<char> {
    input.trim().chars().next().filter(|c| is_cjk_ideograph(*c))
}

/// The four fields the metadata backend must return.
///
/// Field names mirror the JSON schema sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterFields {
    /// Pinyin with tone marks, e.g. `māo`
    pub pinyin: String,
    /// Concise English definition
    pub definition: String,
    /// A simple Chinese sentence containing the character
    pub example_sentence: String,
    /// English translation of the example sentence
    pub example_sentence_meaning: String,
}

/// Pedagogical metadata for a single character.
///
/// Immutable once built; the shell replaces it wholesale on the next lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterData {
    pub char: String,
    pub pinyin: String,
    pub definition: String,
    pub example_sentence: String,
    pub example_sentence_meaning: String,
}

impl CharacterData {
    /// Combine the requested character with the backend's fields.
    pub fn from_fields(character: impl Into<String>, fields: CharacterFields) -> Self {
        Self {
            char: character.into(),
            pinyin: fields.pinyin,
            definition: fields.definition,
            example_sentence: fields.example_sentence,
            example_sentence_meaning: fields.example_sentence_meaning,
        }
    }

    /// Placeholder data for a character whose metadata lookup failed.
    pub fn fallback(character: impl Into<String>) -> Self {
        Self {
            char: character.into(),
            pinyin: FALLBACK_PINYIN.to_string(),
            definition: FALLBACK_DEFINITION.to_string(),
            example_sentence: String::new(),
            example_sentence_meaning: String::new(),
        }
    }

    /// True when this is the placeholder produced by [`CharacterData::fallback`]
    pub fn is_fallback(&self) -> bool {
        self.pinyin == FALLBACK_PINYIN
            && self.definition == FALLBACK_DEFINITION
            && self.example_sentence.is_empty()
            && self.example_sentence_meaning.is_empty()
    }

    /// Whether the example sentence section has anything to show
    pub fn has_example(&self) -> bool {
        !self.example_sentence.is_empty() || !self.example_sentence_meaning.is_empty()
    }
}
