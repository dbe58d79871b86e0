use tiny_skia::{FillRule, FilterQuality, Mask, Path, Pixmap, PixmapPaint, PixmapRef, Transform};

use crate::paint::{Color, Paint};

/// Owned premultiplied RGBA8 pixel buffer of fixed size.
///
/// A surface never changes size. On resize the owner allocates a new one and
/// drops the old; after allocation it is only repainted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSurface {
    pixmap: Pixmap,
}

impl RenderSurface {
    /// Allocates a transparent surface. Returns `None` for zero-sized requests.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    /// Wraps an existing pixmap.
    #[inline]
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    #[inline]
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
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
    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Raw premultiplied RGBA bytes, row-major, no padding.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Premultiplied RGBA at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let p = self.pixmap.pixel(x, y)?;
        Some([p.red(), p.green(), p.blue(), p.alpha()])
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    /// Fills `path` anti-aliased with the non-zero winding rule.
    pub fn fill_path(&mut self, path: &Path, paint: Paint<'_>) {
        self.pixmap.fill_path(
            path,
            &paint.to_skia(true),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Copies `source` pixels 1:1 to the top-left corner, replacing what was there.
    ///
    /// Only the overlapping region is touched. No filtering or blending takes
    /// place, so the destination ends up byte-identical to the source there.
    pub fn copy_from(&mut self, source: &Pixmap) {
        let cols = self.width().min(source.width()) as usize * 4;
        let rows = self.height().min(source.height()) as usize;
        let dst_stride = self.width() as usize * 4;
        let src_stride = source.width() as usize * 4;
        let dst = self.pixmap.data_mut();
        for (dst_row, src_row) in dst
            .chunks_exact_mut(dst_stride)
            .zip(source.data().chunks_exact(src_stride))
            .take(rows)
        {
            dst_row[..cols].copy_from_slice(&src_row[..cols]);
        }
    }

    /// Draws `source` stretched over the whole surface with bilinear filtering.
    pub fn draw_scaled(&mut self, source: PixmapRef<'_>) {
        let sx = self.width() as f32 / source.width() as f32;
        let sy = self.height() as f32 / source.height() as f32;
        let paint = PixmapPaint { quality: FilterQuality::Bilinear, ..Default::default() };
        self.pixmap.draw_pixmap(0, 0, source, &paint, Transform::from_scale(sx, sy), None);
    }

    /// Source-over composites `layer` at the origin, optionally through a coverage mask.
    pub fn composite(&mut self, layer: &RenderSurface, mask: Option<&Mask>) {
        self.pixmap.draw_pixmap(
            0,
            0,
            layer.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            mask,
        );
    }
}
