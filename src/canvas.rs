//! Drawing surface shared by all visualizers.
//!
//! A [`Canvas`] plays the role of the plotting axis: it owns the RGBA pixel
//! buffer, the plot margins and title, and where the finished figure is
//! written when the visualizer is shown.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;
/// Default margin around the plot area in pixels.
pub const DEFAULT_MARGIN: u32 = 40;

/// RGBA drawing surface with plot-area bookkeeping.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    margin: u32,
    background: Rgba,
    title: Option<String>,
    outpath: Option<PathBuf>,
    /// Tightly packed RGBA bytes, row-major.
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas cleared to white.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let mut canvas = Self {
            width,
            height,
            margin: DEFAULT_MARGIN.min(width / 4).min(height / 4),
            background: Rgba::WHITE,
            title: None,
            outpath: None,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        };
        canvas.clear(Rgba::WHITE);
        Ok(canvas)
    }

    /// Set the figure title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the path the figure is written to on show.
    #[must_use]
    pub fn with_outpath(mut self, path: impl Into<PathBuf>) -> Self {
        self.outpath = Some(path.into());
        self
    }

    /// Set the margin around the plot area.
    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin.min(self.width / 2).min(self.height / 2);
        self
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Margin around the plot area.
    #[must_use]
    pub const fn margin(&self) -> u32 {
        self.margin
    }

    /// Color the canvas was last cleared to.
    #[must_use]
    pub const fn background(&self) -> Rgba {
        self.background
    }

    /// Figure title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Output path, if any.
    #[must_use]
    pub fn outpath(&self) -> Option<&Path> {
        self.outpath.as_deref()
    }

    /// Resize the canvas, discarding its content.
    ///
    /// Zero dimensions are raised to one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.margin = self.margin.min(self.width / 2).min(self.height / 2);
        self.pixels = vec![0; (self.width as usize) * (self.height as usize) * 4];
        self.clear(self.background);
    }

    /// Plot area as `(x_min, x_max, y_min, y_max)` in pixel coordinates.
    #[must_use]
    pub fn plot_area(&self) -> (f32, f32, f32, f32) {
        let m = self.margin as f32;
        (m, self.width as f32 - m, m, self.height as f32 - m)
    }

    /// Fill the whole canvas with a color.
    pub fn clear(&mut self, color: Rgba) {
        self.background = color;
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Get the color at a pixel, or `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let idx = self.index(x, y)?;
        Some(Rgba::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ))
    }

    /// Set a pixel. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Alpha-blend a pixel using the "over" operator.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let Some(idx) = self.index(x, y) else {
            return;
        };

        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }

        let blend = |src: u8, dst: u8| -> u8 {
            let out = (f32::from(src) * src_a + f32::from(dst) * dst_a * (1.0 - src_a)) / out_a;
            out.clamp(0.0, 255.0) as u8
        };

        self.pixels[idx] = blend(color.r, self.pixels[idx]);
        self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
        self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
        self.pixels[idx + 3] = (out_a * 255.0) as u8;
    }

    /// Draw a filled circle centred on `(cx, cy)`.
    ///
    /// The radius is capped at the canvas diagonal and only the part of the
    /// bounding box inside the canvas is visited. Translucent colors are
    /// blended, opaque colors overwrite.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        let diagonal = (self.width as f32).hypot(self.height as f32);
        let r = radius.max(0.5).min(diagonal);
        let (cx, cy) = (cx.round() as i64, cy.round() as i64);
        let ri = r.ceil() as i64;

        let x_range = (cx - ri).max(0)..=(cx + ri).min(i64::from(self.width) - 1);
        let y_range = (cy - ri).max(0)..=(cy + ri).min(i64::from(self.height) - 1);

        for y in y_range {
            for x in x_range.clone() {
                let (dx, dy) = (x - cx, y - cy);
                if ((dx * dx + dy * dy) as f32) > r * r {
                    continue;
                }
                if color.a < 255 {
                    self.blend_pixel(x as u32, y as u32, color);
                } else {
                    self.set_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Draw a horizontal line from `x0` to `x1` inclusive.
    pub fn hline(&mut self, x0: u32, x1: u32, y: u32, color: Rgba) {
        for x in x0.min(x1)..=x0.max(x1) {
            self.set_pixel(x, y, color);
        }
    }

    /// Draw a vertical line from `y0` to `y1` inclusive.
    pub fn vline(&mut self, x: u32, y0: u32, y1: u32, color: Rgba) {
        for y in y0.min(y1)..=y0.max(y1) {
            self.set_pixel(x, y, color);
        }
    }

    /// Raw RGBA bytes, row-major without padding.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Encode the canvas as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buffer, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(buffer)
    }

    /// Write the canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}
