use image::imageops::{self, FilterType};
use image::RgbaImage;
use tiny_skia::{IntSize, Pixmap};

/// Resamples `source` to exactly `target_width × target_height`.
///
/// Uses a bilinear (triangle) filter, which is deterministic for a given input.
/// The source is never touched; asking for the source's own size returns an
/// identical copy, so resampling twice to the same size is a no-op the
/// second time.
///
/// Meant to run once per resize, not once per frame.
pub fn resample(source: &RgbaImage, target_width: u32, target_height: u32) -> RgbaImage {
    if source.dimensions() == (target_width, target_height) {
        return source.clone();
    }
    log::trace!(
        "resample {}x{} -> {}x{}",
        source.width(),
        source.height(),
        target_width,
        target_height
    );
    imageops::resize(source, target_width, target_height, FilterType::Triangle)
}

/// Converts straight-alpha RGBA8 into a premultiplied pixmap.
///
/// Returns `None` for zero-sized images.
pub fn to_pixmap(image: &RgbaImage) -> Option<Pixmap> {
    let size = IntSize::from_wh(image.width(), image.height())?;
    let mut data = Vec::with_capacity(image.as_raw().len());
    for px in image.pixels() {
        let [r, g, b, a] = px.0;
        if a == 255 {
            data.extend_from_slice(&[r, g, b, a]);
        } else {
            let premul = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
            data.extend_from_slice(&[premul(r), premul(g), premul(b), a]);
        }
    }
    Pixmap::from_vec(data, size)
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn gradient(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            Rgba([(x * 255 / w.max(1)) as u8, (y * 255 / h.max(1)) as u8, 128, 255])
        })
    }

    #[test]
    fn output_has_exact_target_size() {
        let src = gradient(100, 100);
        let out = resample(&src, 200, 150);
        assert_eq!(out.dimensions(), (200, 150));
        let out = resample(&src, 1, 7);
        assert_eq!(out.dimensions(), (1, 7));
    }

    #[test]
    fn source_is_left_untouched() {
        let src = gradient(100, 100);
        let before = src.clone();
        let _ = resample(&src, 37, 250);
        assert_eq!(src, before);
    }

    #[test]
    fn resampling_twice_to_same_size_is_idempotent() {
        let src = gradient(100, 100);
        let once = resample(&src, 200, 150);
        let twice = resample(&once, 200, 150);
        assert_eq!(once, twice);
    }

    #[test]
    fn resampling_is_deterministic() {
        let src = gradient(64, 48);
        assert_eq!(resample(&src, 123, 77), resample(&src, 123, 77));
    }

    #[test]
    fn flat_color_survives_resampling() {
        let src = RgbaImage::from_pixel(10, 10, Rgba([200, 100, 50, 255]));
        let out = resample(&src, 33, 21);
        assert!(out.pixels().all(|p| p.0 == [200, 100, 50, 255]));
    }

    #[test]
    fn to_pixmap_premultiplies() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([200, 100, 0, 128]));
        let pixmap = to_pixmap(&img).unwrap();
        assert_eq!(&pixmap.data()[0..4], &[255, 255, 255, 255]);
        assert_eq!(&pixmap.data()[4..8], &[100, 50, 0, 128]);
    }

    #[test]
    fn to_pixmap_rejects_empty() {
        assert!(to_pixmap(&RgbaImage::new(0, 3)).is_none());
    }
}
