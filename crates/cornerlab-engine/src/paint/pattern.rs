use tiny_skia::{FilterQuality, Pattern, Pixmap, Shader, SpreadMode, Transform};

/// Edge behavior for samples that fall outside the pattern image.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TileMode {
    /// Repeat the edge pixels.
    #[default]
    Clamp,
    /// Tile the image.
    Repeat,
    /// Tile the image, mirroring every other copy.
    Mirror,
}

impl From<TileMode> for SpreadMode {
    fn from(mode: TileMode) -> Self {
        match mode {
            TileMode::Clamp => SpreadMode::Pad,
            TileMode::Repeat => SpreadMode::Repeat,
            TileMode::Mirror => SpreadMode::Reflect,
        }
    }
}

/// Fill source that samples an image instead of a solid color.
///
/// The pattern owns its pixels and maps them 1:1 onto the target starting at
/// the origin with nearest sampling. Build it from a buffer that already has
/// the view's size (see [`crate::bitmap::resample`]) so no scaling happens at
/// paint time.
#[derive(Debug, Clone)]
pub struct ImagePattern {
    pixmap: Pixmap,
    tile_mode: TileMode,
}

impl ImagePattern {
    pub fn new(pixmap: Pixmap, tile_mode: TileMode) -> Self {
        Self { pixmap, tile_mode }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn tile_mode(&self) -> TileMode {
        self.tile_mode
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Shader borrowing this pattern's pixels.
    pub fn shader(&self) -> Shader<'_> {
        Pattern::new(
            self.pixmap.as_ref(),
            self.tile_mode.into(),
            FilterQuality::Nearest,
            1.0,
            Transform::identity(),
        )
    }
}
