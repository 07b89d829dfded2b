// ABOUTME: Cover image downsampling into a fixed-width grid of RGB samples
// ABOUTME: Also emits grid rows as ANSI truecolor glyphs

use std::io::Write;

use image::imageops::FilterType;

use crate::constants::display;
use crate::display::RenderError;

/// One 24-bit color sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Row-major RGB samples with a fixed row width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Vec<Rgb>,
    width: usize,
}

impl PixelGrid {
    pub fn new(pixels: Vec<Rgb>, width: usize) -> Result<Self, RenderError> {
        if width == 0 {
            return Err(RenderError::Layout(
                "pixel grid width must be greater than zero".to_string(),
            ));
        }
        Ok(Self { pixels, width })
    }

    /// Grid filled with one color, used when a cover is missing.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Result<Self, RenderError> {
        Self::new(vec![color; width * height], width)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `ceil(len / width)`; a trailing partial row counts as a row.
    pub fn height(&self) -> usize {
        self.pixels.len().div_ceil(self.width)
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Rows from top to bottom. Each call starts a fresh pass.
    pub fn rows(&self) -> std::slice::Chunks<'_, Rgb> {
        self.pixels.chunks(self.width)
    }
}

/// Decodes raster bytes and resizes them to a character-cell grid.
#[derive(Debug, Clone, Copy)]
pub struct Downsampler {
    pub width: u32,
    /// Terminal cells are roughly twice as tall as wide
    pub vertical_compression: f64,
    pub filter: FilterType,
}

impl Default for Downsampler {
    fn default() -> Self {
        Self {
            width: display::COVER_WIDTH,
            vertical_compression: display::VERTICAL_COMPRESSION,
            filter: FilterType::CatmullRom,
        }
    }
}

impl Downsampler {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn target_height(&self, source_width: u32, source_height: u32) -> u32 {
        if source_width == 0 {
            return 1;
        }
        let aspect_ratio = source_height as f64 / source_width as f64;
        let height = (aspect_ratio * self.width as f64 * self.vertical_compression).round();
        (height as u32).max(1)
    }

    pub fn downsample(&self, bytes: &[u8]) -> Result<PixelGrid, RenderError> {
        if self.width == 0 {
            return Err(RenderError::Layout(
                "cover width must be greater than zero".to_string(),
            ));
        }

        let img = image::load_from_memory(bytes)?;
        let target_height = self.target_height(img.width(), img.height());

        log::debug!(
            "Downsampling cover from {}x{} to {}x{}",
            img.width(),
            img.height(),
            self.width,
            target_height
        );

        let resized = img
            .resize_exact(self.width, target_height, self.filter)
            .to_rgb8();
        let pixels = resized
            .pixels()
            .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
            .collect();

        PixelGrid::new(pixels, self.width as usize)
    }
}

/// Writes each sample as `ESC[38;2;R;G;Bm{glyph}ESC[0m`.
pub fn write_pixels(out: &mut dyn Write, row: &[Rgb], glyph: char) -> std::io::Result<()> {
    for px in row {
        write!(out, "\x1b[38;2;{};{};{}m{}\x1b[0m", px.r, px.g, px.b, glyph)?;
    }
    Ok(())
}
