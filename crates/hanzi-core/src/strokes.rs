//! Stroke data for a single character
//!
//! The source format is the `hanzi-writer-data` JSON document:
//!
//! ```json
//! {
//!   "strokes": ["M 391 751 Q 429 ... Z", ...],
//!   "medians": [[[398, 750], [452, 736], ...], ...],
//!   "radStrokes": [0, 1, 2]
//! }
//! ```
//!
//! Source coordinates live in a 1024-unit box with the y axis pointing up and
//! the baseline at 900. Everything is converted to board space (y down,
//! `0..1024` on both axes) when parsed.

use kurbo::{Affine, BezPath, Rect, Shape};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{Point, Polyline};

/// Side length of the square character box in board units
pub const CHAR_BOX_SIZE: f64 = 1024.0;

/// Source y coordinate that maps to the top of the board
const SOURCE_Y_ORIGIN: f64 = 900.0;

/// Raw stroke document as served by the stroke source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeData {
    /// One SVG path per stroke, in stroke order
    pub strokes: Vec<String>,
    /// One median polyline per stroke, same order as `strokes`
    pub medians: Vec<Vec<[f64; 2]>>,
    /// Indices of strokes that belong to the radical, if known
    #[serde(default)]
    pub rad_strokes: Option<Vec<usize>>,
}

impl StrokeData {
    /// Parse the JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A single stroke in board space
#[derive(Debug, Clone)]
pub struct Stroke {
    /// Position in stroke order (0-based)
    pub index: usize,
    /// Filled outline of the stroke
    pub outline: BezPath,
    /// Centre line from the pen-down point to the pen-up point
    pub median: Polyline,
    /// Whether this stroke is part of the character's radical
    pub is_radical: bool,
    bounds: Rect,
}

impl Stroke {
    /// Whether a board-space point lies inside the stroke outline
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point) && self.outline.contains(point)
    }

    /// Arc length of the median
    pub fn median_length(&self) -> f64 {
        self.median.length()
    }
}

/// Parsed strokes for one character, in stroke order
#[derive(Debug, Clone)]
pub struct CharacterStrokes {
    pub character: char,
    pub strokes: Vec<Stroke>,
}

impl CharacterStrokes {
    /// Parse and validate a raw stroke document for `character`.
    ///
    /// Fails when the document has no strokes, when stroke and median counts
    /// disagree, when a path is not valid SVG path data, or when a median
    /// has fewer than two points.
    pub fn from_data(character: char, data: &StrokeData) -> Result<Self> {
        let name = character.to_string();
        if data.strokes.is_empty() {
            return Err(Error::stroke_data(&name, "document has no strokes"));
        }
        if data.strokes.len() != data.medians.len() {
            return Err(Error::stroke_data(
                &name,
                format!(
                    "{} strokes but {} medians",
                    data.strokes.len(),
                    data.medians.len()
                ),
            ));
        }

        let flip = source_to_board();
        let radicals = data.rad_strokes.as_deref().unwrap_or(&[]);

        let strokes = data
            .strokes
            .iter()
            .zip(&data.medians)
            .enumerate()
            .map(|(index, (path, median))| {
                let mut outline = BezPath::from_svg(path).map_err(|e| {
                    Error::stroke_data(&name, format!("stroke {index} has an invalid path: {e}"))
                })?;
                outline.apply_affine(flip);

                if median.len() < 2 {
                    return Err(Error::stroke_data(
                        &name,
                        format!("stroke {index} median has {} points", median.len()),
                    ));
                }
                let median = Polyline::new(
                    median
                        .iter()
                        .map(|[x, y]| flip * Point::new(*x, *y))
                        .collect(),
                );

                let bounds = outline.bounding_box();
                Ok(Stroke {
                    index,
                    outline,
                    median,
                    is_radical: radicals.contains(&index),
                    bounds,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { character, strokes })
    }

    /// Parse straight from the JSON text
    pub fn from_json(character: char, json: &str) -> Result<Self> {
        Self::from_data(character, &StrokeData::from_json(json)?)
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Stroke> {
        self.strokes.get(index)
    }

    /// Locate a board-space point: the stroke covering it and how far along
    /// that stroke's median (0.0..=1.0) the point sits.
    ///
    /// Where strokes overlap, the earliest stroke wins so the overlap is
    /// revealed as soon as the first stroke reaches it.
    pub fn locate(&self, point: Point) -> Option<(usize, f64)> {
        let stroke = self.strokes.iter().find(|s| s.contains(point))?;
        let length = stroke.median_length();
        let fraction = match stroke.median.project(point) {
            Some(proj) if length > 0.0 => (proj.arc_length / length).clamp(0.0, 1.0),
            _ => 0.0,
        };
        Some((stroke.index, fraction))
    }
}

/// Affine mapping source coordinates (y up) to board coordinates (y down)
fn source_to_board() -> Affine {
    Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, SOURCE_Y_ORIGIN])
}


#[cfg(test)]
mod tests {
    use super::test_fixtures::TWO_STROKE_JSON;
    use super::*;

    #[test]
    fn test_parse_two_strokes() {
        let chars = CharacterStrokes::from_json('十', TWO_STROKE_JSON).unwrap();
        assert_eq!(chars.len(), 2);
        assert!(!chars.strokes[0].is_radical);
        assert!(chars.strokes[1].is_radical);
    }

    #[test]
    fn test_medians_are_flipped_into_board_space() {
        let chars = CharacterStrokes::from_json('十', TWO_STROKE_JSON).unwrap();
        let vertical = &chars.strokes[1].median;
        // Source y 830 (near the top) becomes board y 70
        assert_eq!(vertical.start(), Some(Point::new(512.0, 70.0)));
        assert_eq!(vertical.end(), Some(Point::new(512.0, 830.0)));
    }

    #[test]
    fn test_outline_contains_points_on_the_bar() {
        let chars = CharacterStrokes::from_json('十', TWO_STROKE_JSON).unwrap();
        // Horizontal bar spans board y 288..348
        assert!(chars.strokes[0].contains(Point::new(200.0, 318.0)));
        assert!(!chars.strokes[0].contains(Point::new(200.0, 600.0)));
    }

    #[test]
    fn test_locate_reports_stroke_and_fraction() {
        let chars = CharacterStrokes::from_json('十', TWO_STROKE_JSON).unwrap();
        let (stroke, fraction) = chars.locate(Point::new(512.0, 450.0)).unwrap();
        assert_eq!(stroke, 1);
        assert!(fraction > 0.45 && fraction < 0.55);
        assert!(chars.locate(Point::new(50.0, 1000.0)).is_none());
    }

    #[test]
    fn test_locate_overlap_prefers_earlier_stroke() {
        let chars = CharacterStrokes::from_json('十', TWO_STROKE_JSON).unwrap();
        let (stroke, _) = chars.locate(Point::new(512.0, 318.0)).unwrap();
        assert_eq!(stroke, 0);
    }

    #[test]
    fn test_mismatched_counts_rejected() {
        let data = StrokeData {
            strokes: vec!["M 0 0 L 10 0 L 10 10 Z".into()],
            medians: vec![],
            rad_strokes: None,
        };
        let err = CharacterStrokes::from_data('一', &data).unwrap_err();
        assert!(err.to_string().contains("1 strokes but 0 medians"));
    }

    #[test]
    fn test_invalid_path_rejected() {
        let data = StrokeData {
            strokes: vec!["not a path".into()],
            medians: vec![vec![[0.0, 0.0], [10.0, 0.0]]],
            rad_strokes: None,
        };
        assert!(CharacterStrokes::from_data('一', &data).is_err());
    }

    #[test]
    fn test_short_median_rejected() {
        let data = StrokeData {
            strokes: vec!["M 0 0 L 10 0 L 10 10 Z".into()],
            medians: vec![vec![[0.0, 0.0]]],
            rad_strokes: None,
        };
        assert!(CharacterStrokes::from_data('一', &data).is_err());
    }

    #[test]
    fn test_empty_document_rejected() {
        let data = StrokeData {
            strokes: vec![],
            medians: vec![],
            rad_strokes: None,
        };
        assert!(CharacterStrokes::from_data('一', &data).is_err());
    }

    #[test]
    fn test_rad_strokes_optional() {
        let json = r#"{"strokes": ["M 0 0 L 10 0 L 10 10 Z"], "medians": [[[0, 5], [10, 5]]]}"#;
        let data = StrokeData::from_json(json).unwrap();
        assert!(data.rad_strokes.is_none());
    }
}
