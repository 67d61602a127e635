//! Polyline geometry for stroke medians and user traces
//!
//! All coordinates are in board space: a 1024×1024 box with the origin in the
//! top-left corner and y growing downwards.

pub use kurbo::{Point, Vec2};

/// An ordered list of points interpreted as connected line segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

/// Result of projecting a point onto a polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Euclidean distance from the point to the closest point on the polyline
    pub distance: f64,
    /// Arc length from the start of the polyline to the closest point
    pub arc_length: f64,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Total arc length
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }

    /// Number of distinct points (consecutive duplicates collapsed)
    pub fn distinct_len(&self) -> usize {
        let mut count = 0;
        let mut last: Option<Point> = None;
        for p in &self.points {
            if last != Some(*p) {
                count += 1;
                last = Some(*p);
            }
        }
        count
    }

    /// Project a point onto the polyline.
    ///
    /// Returns `None` for an empty polyline. A single-point polyline projects
    /// everything onto that point.
    pub fn project(&self, point: Point) -> Option<Projection> {
        let first = self.start()?;
        if self.points.len() == 1 {
            return Some(Projection {
                distance: point.distance(first),
                arc_length: 0.0,
            });
        }

        let mut best = Projection {
            distance: f64::INFINITY,
            arc_length: 0.0,
        };
        let mut travelled = 0.0;
        for w in self.points.windows(2) {
            let (a, b) = (w[0], w[1]);
            let seg_len = a.distance(b);
            let t = segment_param(a, b, point);
            let closest = a.lerp(b, t);
            let d = point.distance(closest);
            if d < best.distance {
                best = Projection {
                    distance: d,
                    arc_length: travelled + t * seg_len,
                };
            }
            travelled += seg_len;
        }
        Some(best)
    }

    /// Shortest distance from a point to the polyline (infinite when empty)
    pub fn distance_to(&self, point: Point) -> f64 {
        self.project(point)
            .map(|p| p.distance)
            .unwrap_or(f64::INFINITY)
    }

    /// Point located `arc` units along the polyline, clamped to its ends
    pub fn point_at(&self, arc: f64) -> Option<Point> {
        let first = self.start()?;
        if arc <= 0.0 {
            return Some(first);
        }
        let mut remaining = arc;
        for w in self.points.windows(2) {
            let seg_len = w[0].distance(w[1]);
            if remaining <= seg_len && seg_len > 0.0 {
                return Some(w[0].lerp(w[1], remaining / seg_len));
            }
            remaining -= seg_len;
        }
        self.end()
    }

    /// Resample into `count` points spaced evenly by arc length
    pub fn resample(&self, count: usize) -> Polyline {
        if self.points.is_empty() || count == 0 {
            return Polyline::default();
        }
        if count == 1 {
            return Polyline::new(vec![self.points[0]]);
        }
        let total = self.length();
        let points = (0..count)
            .filter_map(|i| self.point_at(total * i as f64 / (count - 1) as f64))
            .collect();
        Polyline::new(points)
    }

    /// Translate to the centroid and scale to unit RMS radius.
    ///
    /// Removes position and size so two curves can be compared by shape alone.
    /// A degenerate curve (all points equal) is returned centred but unscaled.
    pub fn normalized(&self) -> Polyline {
        if self.points.is_empty() {
            return Polyline::default();
        }
        let n = self.points.len() as f64;
        let sum = self
            .points
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
        let centroid = (sum / n).to_point();
        let centred: Vec<Vec2> = self.points.iter().map(|p| *p - centroid).collect();
        let rms = (centred.iter().map(|v| v.hypot2()).sum::<f64>() / n).sqrt();
        let scale = if rms > f64::EPSILON { 1.0 / rms } else { 1.0 };
        Polyline::new(centred.iter().map(|v| (*v * scale).to_point()).collect())
    }

    /// Direction vectors between consecutive points
    pub fn segment_vectors(&self) -> Vec<Vec2> {
        self.points.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// Parameter `t` in `[0, 1]` of the point on segment `a..b` closest to `p`
fn segment_param(a: Point, b: Point, p: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 <= f64::EPSILON {
        return 0.0;
    }
    ((p - a).dot(ab) / len2).clamp(0.0, 1.0)
}

/// Cosine similarity of two vectors (0 when either is zero-length)
pub fn cosine_similarity(a: Vec2, b: Vec2) -> f64 {
    let denom = a.hypot() * b.hypot();
    if denom <= f64::EPSILON {
        return 0.0;
    }
    a.dot(b) / denom
}

/// Discrete Fréchet distance between two polylines.
///
/// Returns infinity when either curve is empty.
pub fn frechet_distance(a: &Polyline, b: &Polyline) -> f64 {
    let (p, q) = (a.points(), b.points());
    if p.is_empty() || q.is_empty() {
        return f64::INFINITY;
    }

    // Row-by-row dynamic programming over the coupling table
    let mut prev = vec![0.0f64; q.len()];
    let mut curr = vec![0.0f64; q.len()];
    for (i, pi) in p.iter().enumerate() {
        for (j, qj) in q.iter().enumerate() {
            let d = pi.distance(*qj);
            curr[j] = match (i, j) {
                (0, 0) => d,
                (0, _) => curr[j - 1].max(d),
                (_, 0) => prev[0].max(d),
                _ => prev[j].min(prev[j - 1]).min(curr[j - 1]).max(d),
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[q.len() - 1]
}
