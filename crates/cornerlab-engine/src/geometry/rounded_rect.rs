use tiny_skia::{Path, PathBuilder};

use crate::coords::{CornerRadii, Rect, Vec2};

use super::KAPPA;

/// Rectangle bounds plus per-corner `(x, y)` radii.
///
/// Radii are stored as given. [`clamped`](Self::clamped) produces the
/// drawable form: negative radii become zero and oversized radii are scaled
/// down so neighbouring corners never overlap.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radii: CornerRadii,
}

impl RoundedRect {
    #[inline]
    pub const fn new(rect: Rect, radii: CornerRadii) -> Self {
        Self { rect, radii }
    }

    /// Same circular radius on every corner.
    #[inline]
    pub const fn uniform(rect: Rect, radius: f32) -> Self {
        Self::new(rect, CornerRadii::all(radius))
    }

    /// Returns the drawable form of this shape.
    ///
    /// A corner with a zero component is square on both axes. When the radii
    /// along any side add up to more than that side, all radii are scaled by
    /// the same factor, so a uniform radius ends up at most half the shorter
    /// side (a stadium).
    pub fn clamped(self) -> Self {
        let rect = self.rect.normalized();
        if rect.is_empty() {
            return Self::new(rect, CornerRadii::zero());
        }

        let square_off = |v: Vec2| if v.x <= 0.0 || v.y <= 0.0 { Vec2::zero() } else { v };
        let r = self.radii.sanitized();
        let radii = CornerRadii::new(
            square_off(r.top_left),
            square_off(r.top_right),
            square_off(r.bottom_right),
            square_off(r.bottom_left),
        );

        let fit = |side: f32, a: f32, b: f32| if a + b > side { side / (a + b) } else { 1.0 };
        let scale = fit(rect.width(), radii.top_left.x, radii.top_right.x)
            .min(fit(rect.width(), radii.bottom_left.x, radii.bottom_right.x))
            .min(fit(rect.height(), radii.top_left.y, radii.bottom_left.y))
            .min(fit(rect.height(), radii.top_right.y, radii.bottom_right.y));

        let radii = if scale < 1.0 { radii.scaled(scale) } else { radii };
        Self::new(rect, radii)
    }

    /// Builds a closed clockwise contour for the clamped shape.
    ///
    /// The contour starts where the top edge leaves the top-left corner. Each
    /// corner is a single cubic quarter-ellipse; edges that collapse to zero
    /// length (stadium shapes) are omitted.
    ///
    /// Returns `None` for empty or non-finite bounds.
    pub fn to_path(&self) -> Option<Path> {
        if !self.rect.is_finite() {
            return None;
        }
        let RoundedRect { rect, radii } = self.clamped();
        if rect.is_empty() {
            return None;
        }

        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        let [tl, tr, br, bl] = radii.corners();
        let k = KAPPA;

        let mut pb = PathBuilder::new();
        pb.move_to(l + tl.x, t);

        if r - tr.x > l + tl.x {
            pb.line_to(r - tr.x, t);
        }
        if tr.x > 0.0 {
            pb.cubic_to(r - tr.x * (1.0 - k), t, r, t + tr.y * (1.0 - k), r, t + tr.y);
        }

        if b - br.y > t + tr.y {
            pb.line_to(r, b - br.y);
        }
        if br.x > 0.0 {
            pb.cubic_to(r, b - br.y * (1.0 - k), r - br.x * (1.0 - k), b, r - br.x, b);
        }

        if l + bl.x < r - br.x {
            pb.line_to(l + bl.x, b);
        }
        if bl.x > 0.0 {
            pb.cubic_to(l + bl.x * (1.0 - k), b, l, b - bl.y * (1.0 - k), l, b - bl.y);
        }

        if t + tl.y < b - bl.y {
            pb.line_to(l, t + tl.y);
        }
        if tl.x > 0.0 {
            pb.cubic_to(l, t + tl.y * (1.0 - k), l + tl.x * (1.0 - k), t, l + tl.x, t);
        }

        pb.close();
        pb.finish()
    }
}

/// Rounded-rectangle path with the same `(radius_x, radius_y)` on each corner.
///
/// See [`RoundedRect::to_path`] for the contour layout and clamping rules.
pub fn rounded_rect_path(bounds: Rect, radius_x: f32, radius_y: f32) -> Option<Path> {
    RoundedRect::new(bounds, CornerRadii::elliptical(radius_x, radius_y)).to_path()
}
