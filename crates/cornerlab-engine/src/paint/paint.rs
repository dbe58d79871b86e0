use crate::paint::{Color, ImagePattern};

/// Paint source for filling geometry.
///
/// Borrows pattern pixels so a strategy can keep its prepared pattern and
/// hand it out per frame without copying.
#[derive(Debug, Copy, Clone)]
pub enum Paint<'a> {
    Solid(Color),
    Pattern(&'a ImagePattern),
}

impl<'a> Paint<'a> {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn pattern(pattern: &'a ImagePattern) -> Self {
        Paint::Pattern(pattern)
    }

    /// Rasterizer paint with source-over blending.
    pub fn to_skia(&self, anti_alias: bool) -> tiny_skia::Paint<'a> {
        let shader = match *self {
            Paint::Solid(c) => tiny_skia::Shader::SolidColor(c.to_skia()),
            Paint::Pattern(p) => p.shader(),
        };
        tiny_skia::Paint { shader, anti_alias, ..Default::default() }
    }
}
