use crate::bitmap::{resample, to_pixmap, SourceImage};
use crate::coords::{CornerRadii, Rect};
use crate::geometry::RoundedRect;
use crate::paint::{ImagePattern, Paint, TileMode};
use crate::raster::RenderSurface;

use super::{CornerPercent, CornerStrategy, Invalidation, StrategyKind, DEFAULT_RADIUS};

/// Fills a rounded-rect path with the resampled image on every render.
///
/// The path is rebuilt and rasterized each frame, which makes this the most
/// expensive strategy per render. Edge quality is whatever the anti-aliased
/// path fill gives.
pub struct PathClipStrategy {
    source: SourceImage,
    pattern: Option<ImagePattern>,
    bounds: Rect,
    radii: CornerRadii,
    invalidation: Invalidation,
}

impl PathClipStrategy {
    pub fn new(source: SourceImage) -> Self {
        Self {
            source,
            pattern: None,
            bounds: Rect::default(),
            radii: CornerRadii::all(DEFAULT_RADIUS),
            invalidation: Invalidation::default(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }
}

impl CornerStrategy for PathClipStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::PathClip
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.bounds = Rect::from_size(width, height);
        self.pattern = if width == 0 || height == 0 {
            None
        } else {
            let scaled = resample(self.source.as_rgba(), width, height);
            to_pixmap(&scaled).map(|pixmap| ImagePattern::new(pixmap, TileMode::Clamp))
        };
        log::debug!("path-clip: pattern rebuilt for {width}x{height}");
        self.invalidation.merge(Invalidation::REDRAW);
    }

    fn on_corner_change(&mut self, percent: CornerPercent) {
        let radius = percent.radius_for(self.bounds.width() as u32);
        self.radii = CornerRadii::all(radius);
        self.invalidation.merge(Invalidation::REDRAW);
    }

    fn render(&self, surface: &mut RenderSurface) {
        let Some(pattern) = &self.pattern else {
            return;
        };
        let Some(path) = RoundedRect::new(self.bounds, self.radii).to_path() else {
            return;
        };
        surface.fill_path(&path, Paint::pattern(pattern));
    }

    fn invalidate(&mut self) {
        self.invalidation.merge(Invalidation::REDRAW);
    }

    fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.invalidation)
    }

    fn radius(&self) -> f32 {
        self.radii.top_left.x
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::rounded_rect::tests::{flatten, self_intersects};
    use crate::strategy::test_support::gradient_source;

    use super::*;

    fn strategy_at(w: u32, h: u32, percent: i32) -> PathClipStrategy {
        let mut s = PathClipStrategy::new(gradient_source(100, 100));
        s.on_resize(w, h);
        s.on_corner_change(CornerPercent::new(percent));
        s
    }

    #[test]
    fn resize_sets_bounds_and_pattern() {
        let s = strategy_at(200, 150, 0);
        assert_eq!(s.bounds(), Rect::new(0.0, 0.0, 200.0, 150.0));
        let pattern = s.pattern.as_ref().unwrap();
        assert_eq!((pattern.width(), pattern.height()), (200, 150));
    }

    #[test]
    fn corner_change_sets_all_radii_and_requests_redraw() {
        let mut s = strategy_at(200, 150, 20);
        assert_eq!(s.radii(), CornerRadii::all(40.0));
        assert_eq!(s.take_invalidation(), Invalidation::REDRAW);
    }

    #[test]
    fn scenario_rounded_corners_at_twenty_percent() {
        let s = strategy_at(200, 150, 20);
        assert_eq!(s.radius(), 40.0);

        let mut surface = RenderSurface::new(200, 150).unwrap();
        s.render(&mut surface);
        assert_eq!(surface.size(), (200, 150));
        // Corners lie outside the 40px arcs.
        for (x, y) in [(1, 1), (198, 1), (198, 148), (1, 148), (8, 8)] {
            assert_eq!(surface.pixel(x, y).unwrap()[3], 0, "({x}, {y})");
        }
        // Interior and straight edges are fully covered.
        for (x, y) in [(100, 75), (100, 0), (0, 75), (199, 75), (100, 149), (20, 20)] {
            assert_eq!(surface.pixel(x, y).unwrap()[3], 255, "({x}, {y})");
        }
    }

    #[test]
    fn interior_shows_resampled_pixels() {
        let s = strategy_at(200, 150, 20);
        let mut surface = RenderSurface::new(200, 150).unwrap();
        s.render(&mut surface);
        let expected = to_pixmap(&resample(s.source.as_rgba(), 200, 150)).unwrap();
        let p = expected.pixel(100, 75).unwrap();
        assert_eq!(surface.pixel(100, 75), Some([p.red(), p.green(), p.blue(), p.alpha()]));
    }

    #[test]
    fn zero_percent_is_plain_rectangle() {
        let s = strategy_at(200, 150, 0);
        assert!(s.radii().is_zero());
        let mut surface = RenderSurface::new(200, 150).unwrap();
        s.render(&mut surface);
        assert!(surface.data().chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn hundred_percent_is_a_stadium() {
        let s = strategy_at(200, 150, 100);
        assert_eq!(s.radius(), 200.0);
        let path = RoundedRect::new(s.bounds(), s.radii()).to_path().unwrap();
        assert!(!self_intersects(&flatten(&path)));

        let mut surface = RenderSurface::new(200, 150).unwrap();
        s.render(&mut surface);
        assert_eq!(surface.pixel(100, 75).unwrap()[3], 255);
        assert_eq!(surface.pixel(5, 5).unwrap()[3], 0);
    }

    #[test]
    fn collapsing_to_zero_size_drops_pattern() {
        let mut s = strategy_at(200, 150, 20);
        s.on_resize(0, 150);
        assert!(s.pattern.is_none());
        let mut surface = RenderSurface::new(4, 4).unwrap();
        s.render(&mut surface);
        assert!(surface.data().iter().all(|b| *b == 0));
    }
}
