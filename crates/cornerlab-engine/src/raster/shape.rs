use tiny_skia::{Path, PathBuilder};

use crate::coords::Rect;
use crate::effect::CornerPathEffect;
use crate::paint::Paint;

use super::RenderSurface;

/// Rectangle drawable that generates its own path from its bounds.
///
/// Callers never see the path. A [`CornerPathEffect`] passed to
/// [`draw`](Self::draw) is applied to the generated rectangle at paint time.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RectShape {
    bounds: Rect,
}

impl RectShape {
    #[inline]
    pub const fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn path(&self) -> Option<Path> {
        Some(PathBuilder::from_rect(self.bounds.normalized().to_skia()?))
    }

    /// Fills the shape; empty bounds draw nothing.
    pub fn draw(&self, surface: &mut RenderSurface, paint: Paint<'_>, effect: Option<&CornerPathEffect>) {
        let Some(path) = self.path() else {
            return;
        };
        let path = match effect {
            Some(effect) => match effect.apply(&path) {
                Some(p) => p,
                None => return,
            },
            None => path,
        };
        surface.fill_path(&path, paint);
    }
}

#[cfg(test)]
mod tests {
    use crate::paint::Color;

    use super::*;

    const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    #[test]
    fn plain_shape_fills_its_bounds() {
        let mut s = RenderSurface::new(20, 20).unwrap();
        RectShape::new(Rect::new(5.0, 5.0, 10.0, 10.0)).draw(&mut s, Paint::solid(WHITE), None);
        assert_eq!(s.pixel(5, 5), Some([255, 255, 255, 255]));
        assert_eq!(s.pixel(14, 14), Some([255, 255, 255, 255]));
        assert_eq!(s.pixel(4, 4), Some([0, 0, 0, 0]));
        assert_eq!(s.pixel(15, 15), Some([0, 0, 0, 0]));
    }

    #[test]
    fn effect_rounds_the_corners() {
        let mut s = RenderSurface::new(100, 100).unwrap();
        let effect = CornerPathEffect::new(30.0);
        RectShape::new(Rect::from_size(100, 100)).draw(&mut s, Paint::solid(WHITE), Some(&effect));
        assert_eq!(s.pixel(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(s.pixel(98, 98), Some([0, 0, 0, 0]));
        assert_eq!(s.pixel(50, 0), Some([255, 255, 255, 255]));
        assert_eq!(s.pixel(50, 50), Some([255, 255, 255, 255]));
    }

    #[test]
    fn empty_bounds_draw_nothing() {
        let mut s = RenderSurface::new(10, 10).unwrap();
        RectShape::default().draw(&mut s, Paint::solid(WHITE), None);
        assert!(s.data().iter().all(|b| *b == 0));
    }
}
