use tiny_skia::{Path, PathBuilder, PathSegment};

use crate::coords::Vec2;

/// Rounds the joins between consecutive straight segments of a path.
///
/// Each corner is replaced by a quadratic curve: the path steps back from the
/// corner by `min(radius, segment / 2)` along both adjoining edges and the
/// corner itself becomes the control point. Curved segments pass through
/// untouched.
///
/// The effect knows nothing about rectangles. How round the result looks
/// depends on the path it is applied to, and for short edges the step is
/// capped at half the edge, so very large radii flatten into smooth
/// quadratic blobs rather than circular arcs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CornerPathEffect {
    radius: f32,
}

impl CornerPathEffect {
    #[inline]
    pub const fn new(radius: f32) -> Self {
        Self { radius }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the rounded copy of `path`.
    ///
    /// A non-positive or non-finite radius leaves the path unchanged.
    pub fn apply(&self, path: &Path) -> Option<Path> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Some(path.clone());
        }

        let segments: Vec<PathSegment> = path.segments().collect();
        let mut pb = PathBuilder::new();
        let mut start = 0;
        while start < segments.len() {
            let end = segments[start + 1..]
                .iter()
                .position(|s| matches!(s, PathSegment::MoveTo(_)))
                .map_or(segments.len(), |i| start + 1 + i);
            Contour::new(&mut pb, self.radius).run(&segments[start..end]);
            start = end;
        }
        pb.finish()
    }
}

/// Step from `a` towards `b`, and whether a straight run remains between the
/// two rounded ends.
fn compute_step(a: Vec2, b: Vec2, radius: f32) -> (Vec2, bool) {
    let delta = b - a;
    let dist = delta.length();
    if dist <= radius * 2.0 {
        (delta * 0.5, false)
    } else {
        (delta * (radius / dist), true)
    }
}

struct Contour<'a> {
    pb: &'a mut PathBuilder,
    radius: f32,
    start: Vec2,
    current: Vec2,
    /// Whether output has begun for this contour.
    started: bool,
    /// Step of the first edge, used to round the closing corner.
    first_step: Option<Vec2>,
    at_first_edge: bool,
    prev_was_line: bool,
}

impl<'a> Contour<'a> {
    fn new(pb: &'a mut PathBuilder, radius: f32) -> Self {
        Self {
            pb,
            radius,
            start: Vec2::zero(),
            current: Vec2::zero(),
            started: false,
            first_step: None,
            at_first_edge: true,
            prev_was_line: false,
        }
    }

    fn run(mut self, segments: &[PathSegment]) {
        let closed = matches!(segments.last(), Some(PathSegment::Close));
        for seg in segments {
            match *seg {
                PathSegment::MoveTo(p) => {
                    self.start = p.into();
                    self.current = self.start;
                    // Closed contours start after the first corner.
                    if !closed {
                        self.pb.move_to(p.x, p.y);
                        self.started = true;
                    }
                }
                PathSegment::LineTo(p) => self.line(p.into()),
                PathSegment::QuadTo(c, p) => {
                    self.begin_curve();
                    self.pb.quad_to(c.x, c.y, p.x, p.y);
                    self.current = p.into();
                }
                PathSegment::CubicTo(c0, c1, p) => {
                    self.begin_curve();
                    self.pb.cubic_to(c0.x, c0.y, c1.x, c1.y, p.x, p.y);
                    self.current = p.into();
                }
                PathSegment::Close => {
                    // Implicit closing edge.
                    if (self.current - self.start).length() > f32::EPSILON {
                        self.line(self.start);
                    }
                    if let Some(step) = self.first_step {
                        let corner = self.current;
                        let end = corner + step;
                        self.pb.quad_to(corner.x, corner.y, end.x, end.y);
                    }
                    self.pb.close();
                    return;
                }
            }
        }
        if self.prev_was_line {
            self.pb.line_to(self.current.x, self.current.y);
        }
    }

    fn line(&mut self, to: Vec2) {
        let from = self.current;
        let (step, draw_segment) = compute_step(from, to, self.radius);
        let entry = from + step;
        if !self.started {
            self.pb.move_to(entry.x, entry.y);
            self.started = true;
        } else if !self.at_first_edge {
            self.pb.quad_to(from.x, from.y, entry.x, entry.y);
        }
        if draw_segment {
            let exit = to - step;
            self.pb.line_to(exit.x, exit.y);
        }
        if self.at_first_edge {
            self.first_step = Some(step);
            self.at_first_edge = false;
        }
        self.current = to;
        self.prev_was_line = true;
    }

    fn begin_curve(&mut self) {
        if !self.started {
            self.pb.move_to(self.current.x, self.current.y);
            self.started = true;
        }
        self.first_step = None;
        self.at_first_edge = false;
        self.prev_was_line = false;
    }
}
