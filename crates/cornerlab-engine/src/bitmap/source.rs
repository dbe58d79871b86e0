use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use image::RgbaImage;

/// Decoded, immutable source pixels (straight-alpha RGBA8).
///
/// Cloning is cheap: the pixel buffer is shared.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: Arc<RgbaImage>,
}

impl SourceImage {
    /// Decodes an image file.
    ///
    /// A missing or corrupt file is an error; a strategy is never built from
    /// partially decoded pixels.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path)
            .with_context(|| format!("failed to decode source image {}", path.display()))?;
        Self::from_rgba(decoded.to_rgba8())
    }

    /// Decodes an in-memory encoded image (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded =
            image::load_from_memory(bytes).context("failed to decode in-memory source image")?;
        Self::from_rgba(decoded.to_rgba8())
    }

    /// Wraps already-decoded pixels.
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self> {
        anyhow::ensure!(
            pixels.width() > 0 && pixels.height() > 0,
            "source image has zero size ({}x{})",
            pixels.width(),
            pixels.height()
        );
        log::debug!("source image ready: {}x{}", pixels.width(), pixels.height());
        Ok(Self { pixels: Arc::new(pixels) })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba};

    use super::*;

    fn encoded_png(w: u32, h: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png_bytes() {
        let src = SourceImage::from_bytes(&encoded_png(4, 3)).unwrap();
        assert_eq!((src.width(), src.height()), (4, 3));
        assert_eq!(src.as_rgba().get_pixel(2, 1), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn corrupt_bytes_fail_construction() {
        let err = SourceImage::from_bytes(b"definitely not an image").unwrap_err();
        assert!(format!("{err:#}").contains("failed to decode"));
    }

    #[test]
    fn missing_file_fails_construction() {
        let err = SourceImage::open("/nonexistent/cornerlab/butterfly.png").unwrap_err();
        assert!(format!("{err:#}").contains("butterfly.png"));
    }

    #[test]
    fn zero_sized_pixels_are_rejected() {
        assert!(SourceImage::from_rgba(RgbaImage::new(0, 5)).is_err());
    }

    #[test]
    fn clones_share_pixels() {
        let a = SourceImage::from_rgba(RgbaImage::new(2, 2)).unwrap();
        let b = a.clone();
        assert!(std::ptr::eq(a.as_rgba(), b.as_rgba()));
    }
}
