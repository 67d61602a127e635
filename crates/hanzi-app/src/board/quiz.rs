//! Write-and-check quiz over a character's strokes

use hanzi_core::prelude::*;
use hanzi_core::{CharacterStrokes, MatchOutcome, Point, Polyline, StrokeMatcher};

/// Result of finishing one trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// The expected stroke was drawn; `complete` when it was the last one
    Accepted { stroke: usize, complete: bool },
    /// The trace did not match the expected stroke
    Missed { stroke: usize, misses: u32 },
    /// Too short to judge
    Ignored,
}

/// Progress through a quiz
#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    /// Index of the stroke the user must draw next
    current: usize,
    /// Misses on the current stroke
    misses: u32,
    /// Misses across the whole quiz
    total_misses: u32,
    /// Trace in progress while the pointer is down
    trace: Option<Polyline>,
}

impl Quiz {
    pub fn new() -> Self {
        Self {
            current: 0,
            misses: 0,
            total_misses: 0,
            trace: None,
        }
    }

    pub fn current_stroke(&self) -> usize {
        self.current
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn total_misses(&self) -> u32 {
        self.total_misses
    }

    pub fn trace(&self) -> Option<&Polyline> {
        self.trace.as_ref()
    }

    /// Start a new trace, discarding any unfinished one
    pub fn pointer_down(&mut self, point: Point) {
        self.trace = Some(Polyline::new(vec![point]));
    }

    /// Extend the trace; ignored when no trace is active
    pub fn pointer_move(&mut self, point: Point) {
        if let Some(trace) = self.trace.as_mut() {
            if trace.end() != Some(point) {
                trace.push(point);
            }
        }
    }

    /// Finish the trace and grade it against the expected stroke.
    ///
    /// Returns `None` when no trace was active.
    pub fn pointer_up(
        &mut self,
        point: Point,
        strokes: &CharacterStrokes,
        matcher: &StrokeMatcher,
    ) -> Option<QuizStep> {
        self.pointer_move(point);
        let trace = self.trace.take()?;
        let stroke = strokes.get(self.current)?;

        match matcher.check(&trace, stroke) {
            MatchOutcome::Matched => {
                debug!("Stroke {} accepted", self.current);
                let accepted = self.current;
                self.current += 1;
                self.misses = 0;
                Some(QuizStep::Accepted {
                    stroke: accepted,
                    complete: self.current >= strokes.len(),
                })
            }
            MatchOutcome::Mismatched(reason) => {
                self.misses += 1;
                self.total_misses += 1;
                debug!(
                    "Stroke {} missed ({:?}), {} misses",
                    self.current, reason, self.misses
                );
                Some(QuizStep::Missed {
                    stroke: self.current,
                    misses: self.misses,
                })
            }
            MatchOutcome::Ignored => Some(QuizStep::Ignored),
        }
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanzi_backend::test_utils::PLUS_STROKES_JSON;

    fn plus() -> CharacterStrokes {
        CharacterStrokes::from_json('十', PLUS_STROKES_JSON).unwrap()
    }

    fn draw(quiz: &mut Quiz, strokes: &CharacterStrokes, from: Point, to: Point) -> QuizStep {
        quiz.pointer_down(from);
        quiz.pointer_move(from.lerp(to, 0.5));
        quiz.pointer_up(to, strokes, &StrokeMatcher::default()).unwrap()
    }

    #[test]
    fn test_correct_strokes_complete_quiz() {
        let strokes = plus();
        let mut quiz = Quiz::new();
        let step = draw(&mut quiz, &strokes, Point::new(132.0, 318.0), Point::new(892.0, 318.0));
        assert_eq!(step, QuizStep::Accepted { stroke: 0, complete: false });
        let step = draw(&mut quiz, &strokes, Point::new(512.0, 70.0), Point::new(512.0, 830.0));
        assert_eq!(step, QuizStep::Accepted { stroke: 1, complete: true });
    }

    #[test]
    fn test_wrong_order_counts_misses_without_resetting() {
        let strokes = plus();
        let mut quiz = Quiz::new();
        draw(&mut quiz, &strokes, Point::new(132.0, 318.0), Point::new(892.0, 318.0));

        // Redrawing the horizontal stroke instead of the vertical one
        for expected in 1..=2 {
            let step = draw(&mut quiz, &strokes, Point::new(132.0, 318.0), Point::new(892.0, 318.0));
            assert_eq!(step, QuizStep::Missed { stroke: 1, misses: expected });
        }
        assert_eq!(quiz.current_stroke(), 1);
        assert_eq!(quiz.total_misses(), 2);
    }

    #[test]
    fn test_click_is_ignored() {
        let strokes = plus();
        let mut quiz = Quiz::new();
        quiz.pointer_down(Point::new(300.0, 318.0));
        let step = quiz.pointer_up(Point::new(300.0, 318.0), &strokes, &StrokeMatcher::default());
        assert_eq!(step, Some(QuizStep::Ignored));
        assert_eq!(quiz.current_stroke(), 0);
        assert_eq!(quiz.misses(), 0);
    }

    #[test]
    fn test_pointer_up_without_down_does_nothing() {
        let strokes = plus();
        let mut quiz = Quiz::new();
        quiz.pointer_move(Point::new(10.0, 10.0));
        assert!(quiz.trace().is_none());
        assert_eq!(
            quiz.pointer_up(Point::new(20.0, 20.0), &strokes, &StrokeMatcher::default()),
            None
        );
    }

    #[test]
    fn test_accepted_stroke_resets_miss_count() {
        let strokes = plus();
        let mut quiz = Quiz::new();
        draw(&mut quiz, &strokes, Point::new(512.0, 70.0), Point::new(512.0, 830.0));
        assert_eq!(quiz.misses(), 1);
        draw(&mut quiz, &strokes, Point::new(132.0, 318.0), Point::new(892.0, 318.0));
        assert_eq!(quiz.misses(), 0);
        assert_eq!(quiz.total_misses(), 1);
    }
}
