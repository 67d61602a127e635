//! # hanzi-core - Core Domain Types
//!
//! Foundation crate for Hanzi Board. Provides domain types, error handling,
//! stroke data parsing, and the geometry used to animate and grade strokes.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, kurbo).
//!
//! ## Public API
//!
//! ### Characters (`character`)
//! - [`CharacterData`] - Pinyin, definition and example sentence for one character
//! - [`CharacterFields`] - The four fields returned by the metadata backend
//! - [`is_cjk_ideograph()`] - Check a `char` against the common Han range
//!
//! ### Strokes (`strokes`)
//! - [`StrokeData`] - Raw `hanzi-writer-data` JSON document
//! - [`CharacterStrokes`] - Parsed outlines and medians in board coordinates
//! - [`Stroke`] - A single stroke (outline path + median polyline)
//!
//! ### Geometry (`geometry`, `matching`)
//! - [`Polyline`] - Median/trace helper with arc-length queries
//! - [`StrokeMatcher`] - Decides whether a user trace matches a stroke
//! - [`BoardGrid`] / [`StrokeRaster`] - Board space to braille dot mapping
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use hanzi_core::prelude::*;
//! ```

pub mod character;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod matching;
pub mod raster;
pub mod strokes;

/// Prelude for common imports used throughout all Hanzi Board crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use character::{first_ideograph, is_cjk_ideograph, CharacterData, CharacterFields};
pub use error::{Error, Result, ResultExt};
pub use geometry::{Point, Polyline};
pub use matching::{MatchOutcome, MatchThresholds, MismatchReason, StrokeMatcher};
pub use raster::{BoardGrid, DotCoverage, StrokeRaster};
pub use strokes::{CharacterStrokes, Stroke, StrokeData, CHAR_BOX_SIZE};
