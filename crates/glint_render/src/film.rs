//! Film: where finalized pixel colors land.

use crate::Color;
use std::path::Path;

/// Sink for finalized pixel colors.
///
/// The scheduler writes through this interface only, so storage, display,
/// and encoding stay out of the render core. Row 0 is the top of the image.
pub trait PixelSink {
    /// Image width in pixels.
    fn width(&self) -> u32;

    /// Image height in pixels.
    fn height(&self) -> u32;

    /// Color channels per pixel.
    fn channels(&self) -> u32 {
        3
    }

    /// Store the finalized color for `(x, y)`.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// In-memory RGB image with f32 channels.
pub struct Film {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Film {
    /// Create a new film cleared to black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read the color at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Convert to packed 8-bit RGB, top row first, clamping each channel
    /// to [0, 1]. Values are stored linearly; no gamma is applied.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.push((255.0 * color.x.clamp(0.0, 1.0)) as u8);
            bytes.push((255.0 * color.y.clamp(0.0, 1.0)) as u8);
            bytes.push((255.0 * color.z.clamp(0.0, 1.0)) as u8);
        }
        bytes
    }

    /// Encode the film as an image file at `path`. The format is chosen
    /// from the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )
    }
}

impl PixelSink for Film {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let index = (y * self.width + x) as usize;
        self.pixels[index] = color;
    }
}
