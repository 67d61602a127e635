//! Quiz stroke matching
//!
//! A user trace is accepted for a stroke when it lies close to the stroke's
//! median, starts and ends near the median's ends, moves in the same general
//! direction, is long enough, and has a similar shape once position and size
//! are factored out.

use crate::geometry::{cosine_similarity, frechet_distance, Polyline, Vec2};
use crate::strokes::Stroke;

/// Number of points both curves are resampled to before shape comparison
const SHAPE_SAMPLES: usize = 30;

/// Rotations applied to the trace when comparing shapes
const SHAPE_ROTATIONS: [f64; 5] = [
    std::f64::consts::PI / 16.0,
    std::f64::consts::PI / 32.0,
    0.0,
    -std::f64::consts::PI / 32.0,
    -std::f64::consts::PI / 16.0,
];

/// Length padding so very short strokes (dots) are not impossible to match
const LENGTH_PADDING: f64 = 25.0;

/// Tunable acceptance thresholds, in board units unless noted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    /// Maximum mean distance from trace points to the median
    pub avg_distance: f64,
    /// Maximum distance between trace start/end and median start/end
    pub start_end_distance: f64,
    /// Minimum mean cosine similarity of trace direction (unitless)
    pub min_cosine_similarity: f64,
    /// Minimum trace/median length ratio (unitless)
    pub min_length_ratio: f64,
    /// Maximum Fréchet distance between normalised curves (unitless)
    pub max_frechet: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            avg_distance: 350.0,
            start_end_distance: 250.0,
            min_cosine_similarity: 0.0,
            min_length_ratio: 0.35,
            max_frechet: 0.40,
        }
    }
}

/// Why a trace was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchReason {
    TooFar,
    WrongEnds,
    WrongDirection,
    TooShort,
    WrongShape,
}

/// Outcome of comparing one trace against one stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The trace matches the stroke
    Matched,
    /// The trace is a real attempt but does not match
    Mismatched(MismatchReason),
    /// Not enough distinct points to judge (a click, not a stroke)
    Ignored,
}

/// Compares user traces to strokes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeMatcher {
    pub thresholds: MatchThresholds,
    /// Multiplier applied to the distance and length thresholds; >1 is easier
    pub leniency: f64,
}

impl Default for StrokeMatcher {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl StrokeMatcher {
    pub fn new(leniency: f64) -> Self {
        Self {
            thresholds: MatchThresholds::default(),
            leniency,
        }
    }

    /// Judge a trace against a stroke
    pub fn check(&self, trace: &Polyline, stroke: &Stroke) -> MatchOutcome {
        if trace.distinct_len() < 2 {
            return MatchOutcome::Ignored;
        }
        let median = &stroke.median;
        let t = &self.thresholds;

        let avg_distance = trace
            .points()
            .iter()
            .map(|p| median.distance_to(*p))
            .sum::<f64>()
            / trace.len() as f64;
        if avg_distance > t.avg_distance * self.leniency {
            return MatchOutcome::Mismatched(MismatchReason::TooFar);
        }

        if !self.ends_match(trace, median) {
            return MatchOutcome::Mismatched(MismatchReason::WrongEnds);
        }

        if !direction_matches(trace, median, t.min_cosine_similarity) {
            return MatchOutcome::Mismatched(MismatchReason::WrongDirection);
        }

        let ratio =
            self.leniency * (trace.length() + LENGTH_PADDING) / (median.length() + LENGTH_PADDING);
        if ratio < t.min_length_ratio {
            return MatchOutcome::Mismatched(MismatchReason::TooShort);
        }

        if !self.shape_fits(trace, median) {
            return MatchOutcome::Mismatched(MismatchReason::WrongShape);
        }

        MatchOutcome::Matched
    }

    fn ends_match(&self, trace: &Polyline, median: &Polyline) -> bool {
        let limit = self.thresholds.start_end_distance * self.leniency;
        match (trace.start(), trace.end(), median.start(), median.end()) {
            (Some(ts), Some(te), Some(ms), Some(me)) => {
                ts.distance(ms) <= limit && te.distance(me) <= limit
            }
            _ => false,
        }
    }

    fn shape_fits(&self, trace: &Polyline, median: &Polyline) -> bool {
        let limit = self.thresholds.max_frechet * self.leniency;
        let expected = median.resample(SHAPE_SAMPLES).normalized();
        let actual = trace.resample(SHAPE_SAMPLES).normalized();
        SHAPE_ROTATIONS
            .iter()
            .any(|angle| frechet_distance(&rotate(&actual, *angle), &expected) <= limit)
    }
}

/// Every trace segment is compared with its best-aligned median segment;
/// the mean of those similarities must exceed `min_similarity`.
fn direction_matches(trace: &Polyline, median: &Polyline, min_similarity: f64) -> bool {
    let median_vectors = median.segment_vectors();
    let similarities: Vec<f64> = trace
        .segment_vectors()
        .into_iter()
        .filter(|v| v.hypot2() > f64::EPSILON)
        .map(|edge| {
            median_vectors
                .iter()
                .map(|m| cosine_similarity(*m, edge))
                .fold(f64::NEG_INFINITY, f64::max)
        })
        .collect();
    if similarities.is_empty() {
        return false;
    }
    let mean = similarities.iter().sum::<f64>() / similarities.len() as f64;
    mean > min_similarity
}

/// Rotate a (centred) polyline about the origin
fn rotate(line: &Polyline, angle: f64) -> Polyline {
    if angle == 0.0 {
        return line.clone();
    }
    let (sin, cos) = angle.sin_cos();
    Polyline::new(
        line.points()
            .iter()
            .map(|p| {
                let v = Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
                v.to_point()
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::strokes::test_fixtures::TWO_STROKE_JSON;
    use crate::strokes::CharacterStrokes;

    fn strokes() -> CharacterStrokes {
        CharacterStrokes::from_json('十', TWO_STROKE_JSON).unwrap()
    }

    fn trace(points: &[(f64, f64)]) -> Polyline {
        Polyline::new(points.iter().map(|(x, y)| Point::new(*x, *y)).collect())
    }

    #[test]
    fn test_trace_along_median_matches() {
        let chars = strokes();
        // Horizontal stroke runs left to right at board y 318
        let t = trace(&[(140.0, 320.0), (400.0, 316.0), (650.0, 322.0), (880.0, 318.0)]);
        assert_eq!(
            StrokeMatcher::default().check(&t, &chars.strokes[0]),
            MatchOutcome::Matched
        );
    }

    #[test]
    fn test_coarse_trace_still_matches() {
        let chars = strokes();
        // Terminal-cell sized jitter along the vertical stroke
        let t = trace(&[
            (500.0, 90.0),
            (530.0, 250.0),
            (496.0, 420.0),
            (528.0, 600.0),
            (512.0, 810.0),
        ]);
        assert_eq!(
            StrokeMatcher::default().check(&t, &chars.strokes[1]),
            MatchOutcome::Matched
        );
    }

    #[test]
    fn test_reversed_trace_rejected() {
        let chars = strokes();
        let t = trace(&[(880.0, 318.0), (500.0, 318.0), (140.0, 318.0)]);
        assert!(matches!(
            StrokeMatcher::default().check(&t, &chars.strokes[0]),
            MatchOutcome::Mismatched(_)
        ));
    }

    #[test]
    fn test_wrong_stroke_rejected() {
        let chars = strokes();
        // Drawing the vertical stroke when the horizontal one is expected
        let t = trace(&[(512.0, 70.0), (512.0, 450.0), (512.0, 830.0)]);
        assert!(matches!(
            StrokeMatcher::default().check(&t, &chars.strokes[0]),
            MatchOutcome::Mismatched(_)
        ));
    }

    #[test]
    fn test_distant_trace_rejected_as_too_far() {
        let chars = strokes();
        let t = trace(&[(140.0, 900.0), (500.0, 900.0), (880.0, 900.0)]);
        assert_eq!(
            StrokeMatcher::default().check(&t, &chars.strokes[0]),
            MatchOutcome::Mismatched(MismatchReason::TooFar)
        );
    }

    #[test]
    fn test_short_trace_rejected() {
        let chars = strokes();
        let t = trace(&[(140.0, 318.0), (200.0, 318.0)]);
        assert!(matches!(
            StrokeMatcher::default().check(&t, &chars.strokes[0]),
            MatchOutcome::Mismatched(_)
        ));
    }

    #[test]
    fn test_click_is_ignored() {
        let chars = strokes();
        let t = trace(&[(300.0, 318.0), (300.0, 318.0)]);
        assert_eq!(
            StrokeMatcher::default().check(&t, &chars.strokes[0]),
            MatchOutcome::Ignored
        );
    }

    #[test]
    fn test_leniency_widens_distance_threshold() {
        let chars = strokes();
        // Parallel to the stroke but 300 units below it: ends are too far
        let t = trace(&[(140.0, 618.0), (500.0, 618.0), (880.0, 618.0)]);
        assert!(matches!(
            StrokeMatcher::new(1.0).check(&t, &chars.strokes[0]),
            MatchOutcome::Mismatched(_)
        ));
        assert_eq!(
            StrokeMatcher::new(1.5).check(&t, &chars.strokes[0]),
            MatchOutcome::Matched
        );
    }
}
