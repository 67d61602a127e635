//! Stroke-by-stroke animation timeline

use std::time::Duration;

use hanzi_core::CharacterStrokes;

/// Fixed part of every stroke's duration, in board units of "length"
const STROKE_LENGTH_PADDING: f64 = 600.0;

/// Board units drawn per millisecond at speed 1.0
const UNITS_PER_MS: f64 = 3.0;

/// Slowest accepted speed multiplier
const MIN_SPEED: f64 = 0.05;

/// Animation pacing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTiming {
    /// Speed multiplier; 2.0 draws twice as fast
    pub speed: f64,
    /// Pause after each stroke before the next starts
    pub delay_between_strokes: Duration,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            speed: 1.0,
            delay_between_strokes: Duration::from_millis(200),
        }
    }
}

/// Time taken to draw a stroke whose median is `median_length` units long
pub fn stroke_duration(median_length: f64, speed: f64) -> Duration {
    let speed = speed.max(MIN_SPEED);
    let ms = (median_length + STROKE_LENGTH_PADDING) / (UNITS_PER_MS * speed);
    Duration::from_secs_f64(ms / 1000.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    start: Duration,
    duration: Duration,
}

/// A running animation of one character
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    segments: Vec<Segment>,
    elapsed: Duration,
    total: Duration,
}

impl Animation {
    pub fn new(strokes: &CharacterStrokes, timing: AnimationTiming) -> Self {
        let mut segments = Vec::with_capacity(strokes.len());
        let mut cursor = Duration::ZERO;
        for (i, stroke) in strokes.strokes.iter().enumerate() {
            if i > 0 {
                cursor += timing.delay_between_strokes;
            }
            let duration = stroke_duration(stroke.median_length(), timing.speed);
            segments.push(Segment {
                start: cursor,
                duration,
            });
            cursor += duration;
        }
        Self {
            segments,
            elapsed: Duration::ZERO,
            total: cursor,
        }
    }

    /// Move the clock forward; returns true once the last stroke is drawn
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.total);
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total
    }

    /// Length of the whole animation, delays included
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Fraction of `stroke` drawn so far, `0.0..=1.0`
    pub fn progress(&self, stroke: usize) -> f64 {
        let Some(seg) = self.segments.get(stroke) else {
            return 0.0;
        };
        if self.elapsed <= seg.start {
            return 0.0;
        }
        if seg.duration.is_zero() {
            return 1.0;
        }
        let into = (self.elapsed - seg.start).as_secs_f64();
        (into / seg.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Stroke currently being drawn, if any (none during the pauses)
    pub fn current_stroke(&self) -> Option<usize> {
        self.segments.iter().position(|seg| {
            self.elapsed > seg.start && self.elapsed < seg.start + seg.duration
        })
    }
}
