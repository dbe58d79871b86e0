use tiny_skia::{FillRule, Mask, Path, Transform};

use crate::coords::{Rect, Vec2};

use super::RoundedRect;

/// Declarative rounded-rectangle clip shape.
///
/// An outline is never rasterized by the code that declares it. It is handed
/// to a compositor (see [`crate::compositor::ClipShapeSink`]), which applies it
/// when the layer is composited: the software compositor turns it into a
/// coverage mask, the GPU presenter evaluates [`signed_distance`] per fragment.
///
/// [`signed_distance`]: Self::signed_distance
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Outline {
    pub rect: Rect,
    /// Requested corner radius; see [`effective_radius`](Self::effective_radius).
    pub radius: f32,
}

impl Outline {
    #[inline]
    pub const fn new(rect: Rect, radius: f32) -> Self {
        Self { rect, radius }
    }

    /// Radius actually applied: clamped to `[0, min(width, height) / 2]`.
    pub fn effective_radius(&self) -> f32 {
        let r = self.rect.normalized();
        let max = 0.5 * r.width().min(r.height()).max(0.0);
        if self.radius.is_finite() { self.radius.clamp(0.0, max) } else { 0.0 }
    }

    /// The equivalent drawable shape.
    pub fn to_rounded_rect(&self) -> RoundedRect {
        RoundedRect::uniform(self.rect, self.effective_radius())
    }

    pub fn to_path(&self) -> Option<Path> {
        self.to_rounded_rect().to_path()
    }

    /// Anti-aliased coverage mask of a `width × height` layer.
    ///
    /// Returns `None` if the layer is zero-sized or the outline is empty.
    pub fn to_mask(&self, width: u32, height: u32) -> Option<Mask> {
        let path = self.to_path()?;
        let mut mask = Mask::new(width, height)?;
        mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
        Some(mask)
    }

    /// Signed distance from `p` to the outline edge; negative inside.
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        let rect = self.rect.normalized();
        let r = self.effective_radius();
        let half = rect.size * 0.5;
        let q = (p - rect.center()).abs() - half + Vec2::new(r, r);
        q.max_scalar(0.0).length() + q.x.max(q.y).min(0.0) - r
    }

    /// Fraction of a pixel centered at `p` that lies inside the outline.
    ///
    /// Same ramp the presenter's fragment shader uses.
    #[inline]
    pub fn coverage(&self, p: Vec2) -> f32 {
        (0.5 - self.signed_distance(p)).clamp(0.0, 1.0)
    }
}

/// Outline covering a `width × height` view with a uniform corner radius.
pub fn rounded_rect_outline(width: u32, height: u32, radius: f32) -> Outline {
    Outline::new(Rect::from_size(width, height), radius)
}
