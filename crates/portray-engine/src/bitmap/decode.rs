use std::fmt;
use std::path::Path;

use resvg::{tiny_skia, usvg};

/// Error returned when an image file cannot be read or decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLoadError(pub String);

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image load error: {}", self.0)
    }
}

impl std::error::Error for ImageLoadError {}

/// Premultiplied RGBA8 image, row-major, no padding.
#[derive(Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Wraps premultiplied RGBA8 pixels. Returns `None` on a size mismatch or empty image.
    pub fn from_premultiplied(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 || pixels.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    /// Converts straight-alpha RGBA8 pixels to a premultiplied bitmap.
    pub fn from_straight(width: u32, height: u32, mut pixels: Vec<u8>) -> Option<Self> {
        for px in pixels.chunks_exact_mut(4) {
            let a = px[3] as u16;
            for c in &mut px[..3] {
                *c = ((*c as u16 * a + 127) / 255) as u8;
            }
        }
        Self::from_premultiplied(width, height, pixels)
    }

    /// A single-color bitmap; handy for placeholders and tests.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Option<Self> {
        let pixels = rgba.repeat(width as usize * height as usize);
        Self::from_straight(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Reads and decodes an image file. SVG is detected by extension.
pub fn decode_file(path: &Path) -> Result<Bitmap, ImageLoadError> {
    let bytes = std::fs::read(path)
        .map_err(|e| ImageLoadError(format!("{}: {e}", path.display())))?;

    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    let decoded = if is_svg { decode_svg(&bytes) } else { decode_bytes(&bytes) };
    decoded.map_err(|e| ImageLoadError(format!("{}: {}", path.display(), e.0)))
}

/// Decodes raster image bytes (format sniffed from content).
pub fn decode_bytes(bytes: &[u8]) -> Result<Bitmap, ImageLoadError> {
    let rgba = ::image::load_from_memory(bytes)
        .map_err(|e| ImageLoadError(e.to_string()))?
        .to_rgba8();

    let (w, h) = rgba.dimensions();
    Bitmap::from_straight(w, h, rgba.into_raw())
        .ok_or_else(|| ImageLoadError(format!("decoded image has invalid size {w}x{h}")))
}

fn decode_svg(bytes: &[u8]) -> Result<Bitmap, ImageLoadError> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| ImageLoadError(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| ImageLoadError("svg has zero size".to_string()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let (w, h) = (pixmap.width(), pixmap.height());
    Bitmap::from_premultiplied(w, h, pixmap.take())
        .ok_or_else(|| ImageLoadError("svg rasterized to an invalid size".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_pixels_are_premultiplied() {
        let bmp = Bitmap::from_straight(1, 1, vec![255, 128, 0, 128]).unwrap();
        assert_eq!(bmp.pixels(), &[128, 64, 0, 128]);
    }

    #[test]
    fn size_mismatch_is_rejected() {
        assert!(Bitmap::from_premultiplied(2, 2, vec![0; 4]).is_none());
        assert!(Bitmap::from_premultiplied(0, 0, vec![]).is_none());
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(decode_bytes(b"definitely not an image").is_err());
    }

    #[test]
    fn png_bytes_decode() {
        let img = ::image::RgbaImage::from_pixel(3, 2, ::image::Rgba([10, 20, 30, 255]));
        let mut png = std::io::Cursor::new(Vec::new());
        img.write_to(&mut png, ::image::ImageFormat::Png).unwrap();

        let bmp = decode_bytes(png.get_ref()).unwrap();
        assert_eq!((bmp.width(), bmp.height()), (3, 2));
        assert_eq!(&bmp.pixels()[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = decode_file(Path::new("/nonexistent/portray/sprite.png")).unwrap_err();
        assert!(err.0.contains("sprite.png"));
    }
}
