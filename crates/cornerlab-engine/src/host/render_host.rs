use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::compositor::{Compositor, SharedClipSink};
use crate::geometry::Outline;
use crate::paint::Color;
use crate::raster::RenderSurface;
use crate::strategy::{CornerPercent, CornerStrategy, Invalidation, StrategyKind};
use crate::time::RenderClock;

use super::{HostConfig, LayerMode};

/// Cost of one strategy render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderTiming {
    pub strategy: StrategyKind,
    pub layer_mode: LayerMode,
    pub duration: Duration,
    pub frame_index: u64,
}

/// Output of [`RenderHost::render`], ready for presentation.
#[derive(Debug, Copy, Clone)]
pub struct Frame<'a> {
    pub surface: &'a RenderSurface,
    /// Outline the presenter still has to clip to (hardware mode only).
    pub clip: Option<Outline>,
    /// Color to show where the surface is transparent.
    pub clear_color: Color,
}

type TimingHook = Box<dyn FnMut(&RenderTiming)>;

/// Owns the active strategy and drives it.
///
/// All calls are synchronous. A notification (resize, corner change, strategy
/// swap) is fully processed, including any buffer rebuilds, before `render`
/// can run again.
pub struct RenderHost {
    strategy: Box<dyn CornerStrategy>,
    compositor: Rc<RefCell<Compositor>>,
    config: HostConfig,

    size: (u32, u32),
    layer: Option<RenderSurface>,
    frame: Option<RenderSurface>,

    dirty: Invalidation,
    layer_valid: bool,

    clock: RenderClock,
    timing_hook: Option<TimingHook>,
}

impl RenderHost {
    /// Creates a host around `strategy`.
    ///
    /// The configured corner percent is forwarded immediately, before the
    /// first resize, the same way a freshly attached view receives the
    /// slider's current position.
    pub fn new(
        strategy: Box<dyn CornerStrategy>,
        compositor: Rc<RefCell<Compositor>>,
        config: HostConfig,
    ) -> Self {
        let mut host = Self {
            strategy,
            compositor,
            config,
            size: (0, 0),
            layer: None,
            frame: None,
            dirty: Invalidation::REDRAW,
            layer_valid: false,
            clock: RenderClock::new(),
            timing_hook: None,
        };
        host.config.strategy = host.strategy.kind();
        host.strategy.on_corner_change(host.config.corner_percent);
        host.absorb_invalidation();
        host
    }

    /// Sink handle to pass to strategies that publish outlines.
    pub fn sink(&self) -> SharedClipSink {
        self.compositor.clone()
    }

    pub fn compositor(&self) -> &Rc<RefCell<Compositor>> {
        &self.compositor
    }

    pub fn strategy(&self) -> &dyn CornerStrategy {
        self.strategy.as_ref()
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Replaces the active strategy.
    ///
    /// The previous strategy and every buffer it owns are dropped before the
    /// new one receives the current size and corner percent. Any outline the
    /// old strategy withdrew on drop is republished by the new one if it
    /// uses the compositor at all.
    pub fn set_strategy(&mut self, strategy: Box<dyn CornerStrategy>) {
        let previous = std::mem::replace(&mut self.strategy, strategy);
        let previous_kind = previous.kind();
        drop(previous);

        self.config.strategy = self.strategy.kind();
        log::info!("strategy: {} -> {}", previous_kind, self.config.strategy);

        let (w, h) = self.size;
        self.strategy.on_resize(w, h);
        self.strategy.on_corner_change(self.config.corner_percent);
        self.absorb_invalidation();
        self.dirty.merge(Invalidation::REDRAW);
        self.layer_valid = false;
    }

    /// View size changed.
    ///
    /// Surfaces are reallocated (released for a zero size), the strategy
    /// rebuilds its caches, and the corner percent is applied again so the
    /// radius follows the new width.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if self.size == (width, height) && self.layer.is_some() {
            return;
        }
        self.size = (width, height);
        self.layer = RenderSurface::new(width, height);
        self.frame = RenderSurface::new(width, height);
        self.layer_valid = false;

        self.strategy.on_resize(width, height);
        self.strategy.on_corner_change(self.config.corner_percent);
        self.absorb_invalidation();
        self.dirty.merge(Invalidation::REDRAW);
        log::debug!("host resized to {width}x{height}");
    }

    pub fn corner_percent(&self) -> CornerPercent {
        self.config.corner_percent
    }

    pub fn set_corner_percent(&mut self, percent: CornerPercent) {
        self.config.corner_percent = percent;
        self.strategy.on_corner_change(percent);
        self.absorb_invalidation();
    }

    pub fn layer_mode(&self) -> LayerMode {
        self.config.layer_mode
    }

    /// Switches where the clip is applied. The strategy is not notified.
    pub fn set_layer_mode(&mut self, mode: LayerMode) {
        if self.config.layer_mode != mode {
            log::info!("layer mode: {} -> {}", self.config.layer_mode, mode);
        }
        self.config.layer_mode = mode;
        self.dirty.merge(Invalidation::REDRAW);
    }

    /// Requests a full render pass.
    pub fn invalidate(&mut self) {
        self.strategy.invalidate();
        self.absorb_invalidation();
    }

    /// Whether anything changed since the last [`render`](Self::render).
    ///
    /// Always `false` while the view has no area: there is nothing to paint.
    pub fn needs_redraw(&self) -> bool {
        self.layer.is_some() && (!self.dirty.is_empty() || !self.layer_valid)
    }

    /// Smoothed strategy render cost.
    pub fn average_render_time(&self) -> Option<Duration> {
        self.clock.average()
    }

    /// Called with every [`RenderTiming`], after it is logged.
    pub fn set_timing_hook(&mut self, hook: impl FnMut(&RenderTiming) + 'static) {
        self.timing_hook = Some(Box::new(hook));
    }

    /// Produces the current frame.
    ///
    /// The strategy paints only when its pixels are stale; an outline-only
    /// change reuses the last layer. Returns `None` while the view has no
    /// area.
    pub fn render(&mut self) -> Option<Frame<'_>> {
        let (Some(layer), Some(frame)) = (self.layer.as_mut(), self.frame.as_mut()) else {
            self.dirty = Invalidation::default();
            return None;
        };

        if self.dirty.redraw || !self.layer_valid {
            layer.clear(Color::transparent());
            let span = self.clock.start();
            self.strategy.render(layer);
            let time = self.clock.finish(span);

            let timing = RenderTiming {
                strategy: self.strategy.kind(),
                layer_mode: self.config.layer_mode,
                duration: time.duration,
                frame_index: time.frame_index,
            };
            log::debug!(
                "strategy={} layer={} render cost~{:?}",
                timing.strategy,
                timing.layer_mode,
                timing.duration
            );
            if let Some(hook) = self.timing_hook.as_mut() {
                hook(&timing);
            }
            self.layer_valid = true;
        }
        self.dirty = Invalidation::default();

        let clear_color = self.config.clear_color;
        match self.config.layer_mode {
            LayerMode::Software => {
                frame.clear(clear_color);
                self.compositor.borrow_mut().composite(layer, frame);
                Some(Frame { surface: frame, clip: None, clear_color })
            }
            LayerMode::Hardware => {
                let clip = self.compositor.borrow().active_clip();
                Some(Frame { surface: layer, clip, clear_color })
            }
        }
    }

    fn absorb_invalidation(&mut self) {
        let inv = self.strategy.take_invalidation();
        self.dirty.merge(inv);
    }
}
