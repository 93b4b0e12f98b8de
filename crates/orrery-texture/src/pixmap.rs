//! A square RGBA8 pixel buffer, the output of every texture strategy.

use std::io::Cursor;
use std::path::Path;

use crate::color::{Paint, Rgb, clamp_channel};
use crate::error::TextureError;
use crate::lcg::Lcg;

/// Square image stored as row-major RGBA pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    size: u32,
    /// Pixel data in row-major RGBA format. Length = `size * size * 4`.
    pixels: Vec<u8>,
}

impl Pixmap {
    /// Create a fully transparent image.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            pixels: vec![0; (size as usize) * (size as usize) * 4],
        }
    }

    /// Create an opaque image filled with `color`.
    pub fn filled(size: u32, color: Rgb) -> Self {
        let mut pixmap = Self::new(size);
        pixmap.fill(color);
        pixmap
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image and return the raw RGBA bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// Overwrite every pixel with an opaque color.
    pub fn fill(&mut self, color: Rgb) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    /// Overwrite a single row with an opaque color.
    ///
    /// # Panics
    ///
    /// Panics if `y >= size`.
    pub fn fill_row(&mut self, y: u32, color: Rgb) {
        let start = (y as usize) * (self.size as usize) * 4;
        let end = start + (self.size as usize) * 4;
        for px in self.pixels[start..end].chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    /// Get a pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= size` or `y >= size`.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Set a pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= size` or `y >= size`.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Composite `paint` over the pixel at `(x, y)` (source-over, straight alpha).
    pub fn blend_pixel(&mut self, x: u32, y: u32, paint: Paint) {
        let src_a = paint.alpha.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }
        let idx = self.index(x, y);
        let dst = &mut self.pixels[idx..idx + 4];
        let dst_a = f32::from(dst[3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        let channel = |s: u8, d: u8| {
            let v = (f32::from(s) * src_a + f32::from(d) * dst_a * (1.0 - src_a)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        dst[0] = channel(paint.rgb.r, dst[0]);
        dst[1] = channel(paint.rgb.g, dst[1]);
        dst[2] = channel(paint.rgb.b, dst[2]);
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Add one noise sample per pixel to R, G and B, clamped to `[0, 255]`.
    ///
    /// Alpha is untouched. Samples are drawn in row-major order, one per pixel.
    pub fn apply_noise(&mut self, rng: &mut Lcg, amplitude: f64) {
        for px in self.pixels.chunks_exact_mut(4) {
            let noise = rng.centered(amplitude);
            px[0] = clamp_channel(f64::from(px[0]) + noise);
            px[1] = clamp_channel(f64::from(px[1]) + noise);
            px[2] = clamp_channel(f64::from(px[2]) + noise);
        }
    }

    /// Count the number of unique colors (ignoring alpha) in the image.
    pub fn unique_color_count(&self) -> usize {
        let mut colors = std::collections::HashSet::new();
        for chunk in self.pixels.chunks_exact(4) {
            colors.insert((chunk[0], chunk[1], chunk[2]));
        }
        colors.len()
    }

    /// Mean RGBA value over the rectangle `[x0, x1) x [y0, y1)`, clipped to the image.
    pub fn mean_region(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> [f64; 4] {
        let (x1, y1) = (x1.min(self.size), y1.min(self.size));
        let mut sum = [0.0; 4];
        let mut count = 0.0;
        for y in y0..y1 {
            for x in x0..x1 {
                let px = self.get_pixel(x, y);
                for (acc, v) in sum.iter_mut().zip(px) {
                    *acc += f64::from(v);
                }
                count += 1.0;
            }
        }
        if count > 0.0 {
            for acc in &mut sum {
                *acc /= count;
            }
        }
        sum
    }

    /// Encode as an 8-bit RGBA PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, TextureError> {
        let mut png_buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(Cursor::new(&mut png_buf), self.size, self.size);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(png_buf)
    }

    /// Encode as PNG and write to `path`, creating parent directories.
    pub fn write_png(&self, path: &Path) -> Result<(), TextureError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        tracing::debug!(path = %path.display(), size = self.size, "wrote texture");
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.size && y < self.size, "pixel ({x}, {y}) out of bounds");
        ((y as usize) * (self.size as usize) + x as usize) * 4
    }
}
