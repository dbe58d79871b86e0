//! Corner-rounding strategies.
//!
//! Three interchangeable ways of drawing an image with rounded corners, all
//! behind [`CornerStrategy`]:
//!
//! | strategy | per-resize | per-corner-change | per-render |
//! |---|---|---|---|
//! | [`PathClipStrategy`] | resample, build pattern | update radii | build path, fill |
//! | [`OutlineClipStrategy`] | resample, publish outline | publish outline | copy pixels |
//! | [`EffectClipStrategy`] | recomposite buffer | rebuild effect, recomposite | rect + effect, fill |
//!
//! All derived state is rebuilt in the notifications; [`CornerStrategy::render`]
//! takes `&self` and only paints.

mod effect_clip;
mod kind;
mod outline_clip;
mod path_clip;
mod percent;

pub use effect_clip::EffectClipStrategy;
pub use kind::{ParseKindError, StrategyKind};
pub use outline_clip::OutlineClipStrategy;
pub use path_clip::PathClipStrategy;
pub use percent::CornerPercent;

use crate::bitmap::SourceImage;
use crate::compositor::SharedClipSink;
use crate::raster::RenderSurface;

/// Corner radius every strategy starts with, before the first corner change.
pub const DEFAULT_RADIUS: f32 = 20.0;

/// What a strategy asked the host to redo since it was last polled.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Invalidation {
    /// Pixel content changed; render again.
    pub redraw: bool,
    /// Only the compositor clip shape changed.
    pub outline: bool,
}

impl Invalidation {
    pub const REDRAW: Invalidation = Invalidation { redraw: true, outline: false };
    pub const OUTLINE: Invalidation = Invalidation { redraw: false, outline: true };

    #[inline]
    pub fn is_empty(self) -> bool {
        !self.redraw && !self.outline
    }

    #[inline]
    pub fn merge(&mut self, other: Invalidation) {
        self.redraw |= other.redraw;
        self.outline |= other.outline;
    }
}

/// Contract between the host and whichever strategy is active.
///
/// Calls are synchronous and happen on one thread. The host always finishes a
/// notification before it asks for the next render.
pub trait CornerStrategy {
    fn kind(&self) -> StrategyKind;

    /// View size changed. Rebuilds every size-dependent cache.
    fn on_resize(&mut self, width: u32, height: u32);

    /// Corner slider moved. The radius becomes `width × percent / 100`.
    fn on_corner_change(&mut self, percent: CornerPercent);

    /// Paints into `surface`, which the host cleared beforehand.
    fn render(&self, surface: &mut RenderSurface);

    /// Requests a future render pass.
    fn invalidate(&mut self);

    /// Returns and resets the pending invalidation.
    fn take_invalidation(&mut self) -> Invalidation;

    /// Radius derived by the last corner change (unclamped).
    fn radius(&self) -> f32;
}

/// Builds a strategy of the given kind around `source`.
///
/// Only the outline strategy uses `sink`.
pub fn create_strategy(
    kind: StrategyKind,
    source: &SourceImage,
    sink: &SharedClipSink,
) -> Box<dyn CornerStrategy> {
    match kind {
        StrategyKind::PathClip => Box::new(PathClipStrategy::new(source.clone())),
        StrategyKind::OutlineClip => Box::new(OutlineClipStrategy::new(source.clone(), sink.clone())),
        StrategyKind::EffectClip => Box::new(EffectClipStrategy::new(source.clone())),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use image::{Rgba, RgbaImage};

    use crate::bitmap::SourceImage;

    /// Opaque gradient; every pixel differs from its neighbours.
    pub(crate) fn gradient_source(w: u32, h: u32) -> SourceImage {
        let img = RgbaImage::from_fn(w, h, |x, y| {
            Rgba([(x * 255 / w) as u8, (y * 255 / h) as u8, ((x + y) % 256) as u8, 255])
        });
        SourceImage::from_rgba(img).unwrap()
    }
}
