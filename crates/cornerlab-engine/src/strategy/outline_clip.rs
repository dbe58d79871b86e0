use tiny_skia::Pixmap;

use crate::bitmap::{resample, to_pixmap, SourceImage};
use crate::compositor::SharedClipSink;
use crate::geometry::{rounded_rect_outline, Outline};
use crate::raster::RenderSurface;

use super::{CornerPercent, CornerStrategy, Invalidation, StrategyKind, DEFAULT_RADIUS};

/// Draws the plain resampled image and leaves the rounding to the compositor.
///
/// The strategy never clips a pixel itself. It publishes a rounded-rect
/// [`Outline`] to the injected sink with clip-to-outline enabled; the result
/// is only correct if the sink honors both. Per-render cost is a memcpy.
///
/// Dropping the strategy withdraws the outline and disables clipping, so
/// whatever replaces it is not clipped by a stale shape.
pub struct OutlineClipStrategy {
    source: SourceImage,
    scaled: Option<Pixmap>,
    outline: Outline,
    sink: SharedClipSink,
    invalidation: Invalidation,
}

impl OutlineClipStrategy {
    pub fn new(source: SourceImage, sink: SharedClipSink) -> Self {
        let s = Self {
            source,
            scaled: None,
            outline: rounded_rect_outline(0, 0, DEFAULT_RADIUS),
            sink,
            invalidation: Invalidation::default(),
        };
        s.publish();
        s
    }

    /// Outline as last published.
    #[inline]
    pub fn outline(&self) -> Outline {
        self.outline
    }

    fn publish(&self) {
        let mut sink = self.sink.borrow_mut();
        sink.set_outline(Some(self.outline));
        sink.set_clip_to_outline(true);
    }
}

impl CornerStrategy for OutlineClipStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::OutlineClip
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.scaled = if width == 0 || height == 0 {
            None
        } else {
            to_pixmap(&resample(self.source.as_rgba(), width, height))
        };
        self.outline = rounded_rect_outline(width, height, self.outline.radius);
        self.publish();
        log::debug!("outline-clip: image rebuilt for {width}x{height}");
        self.invalidation.merge(Invalidation::REDRAW);
        self.invalidation.merge(Invalidation::OUTLINE);
    }

    fn on_corner_change(&mut self, percent: CornerPercent) {
        self.outline.radius = percent.radius_for(self.outline.rect.width() as u32);
        self.publish();
        self.invalidation.merge(Invalidation::OUTLINE);
    }

    fn render(&self, surface: &mut RenderSurface) {
        if let Some(scaled) = &self.scaled {
            surface.copy_from(scaled);
        }
    }

    fn invalidate(&mut self) {
        self.invalidation.merge(Invalidation::REDRAW);
    }

    fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.invalidation)
    }

    fn radius(&self) -> f32 {
        self.outline.radius
    }
}

impl Drop for OutlineClipStrategy {
    fn drop(&mut self) {
        match self.sink.try_borrow_mut() {
            Ok(mut sink) => {
                sink.set_outline(None);
                sink.set_clip_to_outline(false);
            }
            Err(_) => log::error!("outline-clip: sink busy on drop; outline left published"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::compositor::Compositor;
    use crate::strategy::test_support::gradient_source;

    use super::*;

    fn setup() -> (Rc<RefCell<Compositor>>, OutlineClipStrategy) {
        let compositor = Rc::new(RefCell::new(Compositor::new()));
        let s = OutlineClipStrategy::new(gradient_source(100, 100), compositor.clone());
        (compositor, s)
    }

    #[test]
    fn construction_enables_clipping() {
        let (compositor, s) = setup();
        let c = compositor.borrow();
        assert!(c.clip_to_outline());
        assert_eq!(c.outline(), Some(s.outline()));
        assert_eq!(s.radius(), DEFAULT_RADIUS);
    }

    #[test]
    fn scenario_outline_and_unclipped_pixels() {
        let (compositor, mut s) = setup();
        s.on_resize(200, 150);
        s.on_corner_change(CornerPercent::new(20));

        assert_eq!(s.radius(), 40.0);
        assert_eq!(compositor.borrow().active_clip(), Some(rounded_rect_outline(200, 150, 40.0)));

        let mut surface = RenderSurface::new(200, 150).unwrap();
        s.render(&mut surface);
        let expected = to_pixmap(&resample(s.source.as_rgba(), 200, 150)).unwrap();
        assert_eq!(surface.data(), expected.data());
    }

    #[test]
    fn corner_change_only_touches_the_outline() {
        let (_compositor, mut s) = setup();
        s.on_resize(200, 150);
        s.take_invalidation();
        s.on_corner_change(CornerPercent::new(50));
        assert_eq!(s.take_invalidation(), Invalidation::OUTLINE);
    }

    #[test]
    fn resize_republishes_for_new_size() {
        let (compositor, mut s) = setup();
        s.on_resize(200, 150);
        s.on_corner_change(CornerPercent::new(10));
        s.on_resize(300, 100);
        let published = compositor.borrow().outline().unwrap();
        assert_eq!(published.rect.width(), 300.0);
        assert_eq!(published.radius, 20.0);
    }

    #[test]
    fn zero_percent_publishes_square_outline() {
        let (compositor, mut s) = setup();
        s.on_resize(200, 150);
        s.on_corner_change(CornerPercent::new(0));
        assert_eq!(compositor.borrow().outline().unwrap().effective_radius(), 0.0);
    }

    #[test]
    fn drop_withdraws_outline() {
        let (compositor, mut s) = setup();
        s.on_resize(200, 150);
        drop(s);
        let c = compositor.borrow();
        assert_eq!(c.outline(), None);
        assert!(!c.clip_to_outline());
    }
}
