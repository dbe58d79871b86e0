use std::cell::RefCell;
use std::rc::Rc;

use tiny_skia::Mask;

use crate::geometry::Outline;
use crate::raster::RenderSurface;

/// Receiver of declarative clip shapes.
///
/// The producer only states which shape to clip to and whether clipping is
/// on. Whether and how the clip is enforced is up to the implementation.
pub trait ClipShapeSink {
    /// Replaces the published outline; `None` withdraws it.
    fn set_outline(&mut self, outline: Option<Outline>);

    fn set_clip_to_outline(&mut self, clip: bool);
}

/// Sink handle shared between the host and the strategy that publishes into it.
pub type SharedClipSink = Rc<RefCell<dyn ClipShapeSink>>;

struct CachedMask {
    outline: Outline,
    size: (u32, u32),
    mask: Mask,
}

/// Clip-shape sink that owns the layer → frame composite step.
#[derive(Default)]
pub struct Compositor {
    outline: Option<Outline>,
    clip_to_outline: bool,
    cached: Option<CachedMask>,
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("outline", &self.outline)
            .field("clip_to_outline", &self.clip_to_outline)
            .finish_non_exhaustive()
    }
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published outline, whether or not clipping is enabled.
    #[inline]
    pub fn outline(&self) -> Option<Outline> {
        self.outline
    }

    #[inline]
    pub fn clip_to_outline(&self) -> bool {
        self.clip_to_outline
    }

    /// Outline that must be applied right now: published and enabled.
    #[inline]
    pub fn active_clip(&self) -> Option<Outline> {
        if self.clip_to_outline { self.outline } else { None }
    }

    /// Source-over composites `layer` into `frame`, clipped to the active outline.
    ///
    /// The coverage mask is rebuilt only when the outline or the frame size
    /// changes. An active outline with no area hides the layer entirely.
    pub fn composite(&mut self, layer: &RenderSurface, frame: &mut RenderSurface) {
        let Some(outline) = self.active_clip() else {
            frame.composite(layer, None);
            return;
        };

        let size = frame.size();
        let stale = self
            .cached
            .as_ref()
            .map_or(true, |c| c.outline != outline || c.size != size);
        if stale {
            self.cached = outline
                .to_mask(size.0, size.1)
                .map(|mask| CachedMask { outline, size, mask });
            log::trace!("outline mask rebuilt for {}x{}", size.0, size.1);
        }

        match &self.cached {
            Some(c) => frame.composite(layer, Some(&c.mask)),
            None => log::trace!("outline has no area; layer hidden"),
        }
    }
}

impl ClipShapeSink for Compositor {
    fn set_outline(&mut self, outline: Option<Outline>) {
        self.outline = outline;
    }

    fn set_clip_to_outline(&mut self, clip: bool) {
        self.clip_to_outline = clip;
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::rounded_rect_outline;
    use crate::paint::Color;

    use super::*;

    fn opaque_layer(w: u32, h: u32) -> RenderSurface {
        let mut s = RenderSurface::new(w, h).unwrap();
        s.clear(Color::from_srgb_u8(255, 0, 0, 255));
        s
    }

    // ── sink state ────────────────────────────────────────────────────────

    #[test]
    fn clip_needs_outline_and_flag() {
        let mut c = Compositor::new();
        assert_eq!(c.active_clip(), None);

        let outline = rounded_rect_outline(200, 150, 40.0);
        c.set_outline(Some(outline));
        assert_eq!(c.active_clip(), None);

        c.set_clip_to_outline(true);
        assert_eq!(c.active_clip(), Some(outline));

        c.set_outline(None);
        assert_eq!(c.active_clip(), None);
        assert!(c.clip_to_outline());
    }

    #[test]
    fn usable_through_shared_handle() {
        let compositor = Rc::new(RefCell::new(Compositor::new()));
        let sink: SharedClipSink = compositor.clone();
        sink.borrow_mut().set_outline(Some(rounded_rect_outline(10, 10, 2.0)));
        assert_eq!(compositor.borrow().outline(), Some(rounded_rect_outline(10, 10, 2.0)));
    }

    // ── composite ─────────────────────────────────────────────────────────

    #[test]
    fn unclipped_composite_copies_layer() {
        let mut c = Compositor::new();
        let layer = opaque_layer(20, 10);
        let mut frame = RenderSurface::new(20, 10).unwrap();
        c.composite(&layer, &mut frame);
        assert_eq!(frame, layer);
    }

    #[test]
    fn clipped_composite_clears_corners() {
        let mut c = Compositor::new();
        c.set_outline(Some(rounded_rect_outline(200, 150, 40.0)));
        c.set_clip_to_outline(true);

        let layer = opaque_layer(200, 150);
        let mut frame = RenderSurface::new(200, 150).unwrap();
        c.composite(&layer, &mut frame);
        assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(frame.pixel(198, 1), Some([0, 0, 0, 0]));
        assert_eq!(frame.pixel(100, 75), Some([255, 0, 0, 255]));
        assert_eq!(frame.pixel(100, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn empty_outline_hides_layer() {
        let mut c = Compositor::new();
        c.set_outline(Some(rounded_rect_outline(0, 0, 10.0)));
        c.set_clip_to_outline(true);
        let mut frame = RenderSurface::new(8, 8).unwrap();
        c.composite(&opaque_layer(8, 8), &mut frame);
        assert!(frame.data().iter().all(|b| *b == 0));
    }
}
