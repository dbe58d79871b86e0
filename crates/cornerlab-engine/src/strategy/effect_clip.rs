use tiny_skia::Pixmap;

use crate::bitmap::{to_pixmap, SourceImage};
use crate::coords::Rect;
use crate::effect::CornerPathEffect;
use crate::paint::{ImagePattern, Paint, TileMode};
use crate::raster::{RectShape, RenderSurface};

use super::{CornerPercent, CornerStrategy, Invalidation, StrategyKind, DEFAULT_RADIUS};

/// Fills a rectangle shape whose corners are rounded by a [`CornerPathEffect`].
///
/// The source is pre-composited into an off-screen buffer of the view's size
/// and painted through a clamp pattern. Every corner change recomposites that
/// buffer even though only the effect radius changed; the rebuild is kept
/// deliberately simple.
pub struct EffectClipStrategy {
    source: Option<Pixmap>,
    pattern: Option<ImagePattern>,
    effect: CornerPathEffect,
    shape: RectShape,
    size: (u32, u32),
    invalidation: Invalidation,
}

impl EffectClipStrategy {
    pub fn new(source: SourceImage) -> Self {
        Self {
            source: to_pixmap(source.as_rgba()),
            pattern: None,
            effect: CornerPathEffect::new(DEFAULT_RADIUS),
            shape: RectShape::default(),
            size: (0, 0),
            invalidation: Invalidation::default(),
        }
    }

    #[inline]
    pub fn effect(&self) -> CornerPathEffect {
        self.effect
    }

    /// Redraws the source, filtered, into a fresh buffer of the current size.
    fn recomposite(&mut self) {
        let (w, h) = self.size;
        self.pattern = match (&self.source, RenderSurface::new(w, h)) {
            (Some(source), Some(mut buffer)) => {
                buffer.draw_scaled(source.as_ref());
                Some(ImagePattern::new(buffer.into_pixmap(), TileMode::Clamp))
            }
            _ => None,
        };
        log::debug!("effect-clip: buffer recomposited at {w}x{h}, radius {}", self.effect.radius());
    }
}

impl CornerStrategy for EffectClipStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::EffectClip
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.shape.set_bounds(Rect::from_size(width, height));
        self.recomposite();
        self.invalidation.merge(Invalidation::REDRAW);
    }

    fn on_corner_change(&mut self, percent: CornerPercent) {
        let (w, h) = self.size;
        if w == 0 || h == 0 {
            log::trace!("effect-clip: corner change before layout ignored");
            return;
        }
        self.effect = CornerPathEffect::new(percent.radius_for(w));
        self.recomposite();
        self.invalidation.merge(Invalidation::REDRAW);
    }

    fn render(&self, surface: &mut RenderSurface) {
        if let Some(pattern) = &self.pattern {
            self.shape.draw(surface, Paint::pattern(pattern), Some(&self.effect));
        }
    }

    fn invalidate(&mut self) {
        self.invalidation.merge(Invalidation::REDRAW);
    }

    fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.invalidation)
    }

    fn radius(&self) -> f32 {
        self.effect.radius()
    }
}

#[cfg(test)]
mod tests {
    use crate::strategy::test_support::gradient_source;

    use super::*;

    #[test]
    fn corner_change_before_layout_is_a_no_op() {
        let mut s = EffectClipStrategy::new(gradient_source(100, 100));
        s.take_invalidation();
        s.on_corner_change(CornerPercent::new(50));
        assert_eq!(s.radius(), DEFAULT_RADIUS);
        assert!(s.pattern.is_none());
        assert!(s.take_invalidation().is_empty());
    }

    #[test]
    fn resize_allocates_buffer_of_view_size() {
        let mut s = EffectClipStrategy::new(gradient_source(100, 100));
        s.on_resize(200, 150);
        let pattern = s.pattern.as_ref().unwrap();
        assert_eq!((pattern.width(), pattern.height()), (200, 150));
        assert_eq!(pattern.tile_mode(), TileMode::Clamp);
        assert_eq!(s.shape.bounds(), Rect::new(0.0, 0.0, 200.0, 150.0));
    }

    #[test]
    fn corners_are_cut_after_corner_change() {
        let mut s = EffectClipStrategy::new(gradient_source(100, 100));
        s.on_resize(200, 150);
        s.on_corner_change(CornerPercent::new(20));
        assert_eq!(s.radius(), 40.0);

        let mut surface = RenderSurface::new(200, 150).unwrap();
        s.render(&mut surface);
        for (x, y) in [(3, 3), (196, 3), (196, 146), (3, 146)] {
            assert_eq!(surface.pixel(x, y).unwrap()[3], 0, "({x}, {y})");
        }
        for (x, y) in [(100, 75), (100, 0), (0, 75)] {
            assert_eq!(surface.pixel(x, y).unwrap()[3], 255, "({x}, {y})");
        }
    }

    #[test]
    fn corner_change_rebuilds_buffer() {
        let mut s = EffectClipStrategy::new(gradient_source(100, 100));
        s.on_resize(64, 64);
        let before = s.pattern.as_ref().map(|p| p.pixmap().data().as_ptr());
        s.on_corner_change(CornerPercent::new(10));
        let after = s.pattern.as_ref().map(|p| p.pixmap().data().as_ptr());
        assert!(before.is_some() && after.is_some());
        assert_eq!(s.take_invalidation(), Invalidation::REDRAW);
        // Fresh allocation.
        assert_ne!(before, after);
    }

    #[test]
    fn zero_size_resize_releases_buffer() {
        let mut s = EffectClipStrategy::new(gradient_source(100, 100));
        s.on_resize(50, 50);
        s.on_resize(0, 0);
        assert!(s.pattern.is_none());
    }
}
