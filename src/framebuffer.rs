//! Pixel storage the tracer renders into

use std::path::PathBuf;

use crate::{
    color::{colors, Color, VecExt},
    error::Result,
};

/// Destination of a rendered frame
///
/// Pixel (0, 0) is the bottom-left corner.
pub trait FrameBuffer {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Writes a single pixel, coordinates outside the buffer are ignored
    fn set_color(&mut self, x: u32, y: u32, color: Color);
    /// Presents the frame, called once after every pixel has been written
    fn show_color_buffer(&mut self) -> Result<()> {
        Ok(())
    }
}

/// An in-memory grid of colors
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBuffer {
    width: u32,
    height: u32,
    /// Row-major, bottom row first
    pixels: Vec<Color>,
}

impl ColorBuffer {
    /// Creates a black buffer of `width` x `height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![colors::BLACK; width as usize * height as usize],
        }
    }

    /// Resizes the buffer, clearing it to black
    pub fn set_frame_buffer_size(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Returns the color at (`x`, `y`), or `None` outside the buffer
    pub fn get_color(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Fills the whole buffer with `color`
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Converts the buffer into an 8-bit image, flipping it so row 0 is the top.
    pub fn to_image(&self) -> image::RgbImage {
        image::ImageBuffer::from_fn(self.width, self.height, |x, row| {
            let y = self.height - 1 - row;
            self.pixels[y as usize * self.width as usize + x as usize].to_pixel()
        })
    }
}

impl FrameBuffer for ColorBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_color(&mut self, x: u32, y: u32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }
}

/// A [ColorBuffer] written to an image file whenever it is shown
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub buffer: ColorBuffer,
    pub output: PathBuf,
}

impl ImageFile {
    /// Creates a new ImageFile
    pub fn new(width: u32, height: u32, output: impl Into<PathBuf>) -> Self {
        Self {
            buffer: ColorBuffer::new(width, height),
            output: output.into(),
        }
    }
}

impl FrameBuffer for ImageFile {
    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }

    fn set_color(&mut self, x: u32, y: u32, color: Color) {
        self.buffer.set_color(x, y, color);
    }

    fn show_color_buffer(&mut self) -> Result<()> {
        self.buffer.to_image().save(&self.output)?;
        log::info!("Image written to {:?}", self.output);
        Ok(())
    }
}
