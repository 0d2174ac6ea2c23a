use crate::core::data::colour::Colour;
use crate::core::data::pixel_format::{BYTES_PER_PIXEL, PixelFormat};
use rayon::prelude::*;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameBufferError {
    InvalidDimension { width: i32, height: i32 },
    Allocation { width: u32, height: u32 },
    DisplayLengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "frame buffer size must be positive: {}x{}", width, height)
            }
            Self::Allocation { width, height } => {
                write!(f, "could not allocate a {}x{} frame buffer", width, height)
            }
            Self::DisplayLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "display buffer length {} does not match expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

fn checked_dimensions(width: i32, height: i32) -> Result<(u32, u32), FrameBufferError> {
    if width <= 0 || height <= 0 {
        return Err(FrameBufferError::InvalidDimension { width, height });
    }

    Ok((width as u32, height as u32))
}

fn allocate_pixels(width: u32, height: u32) -> Result<Vec<Colour>, FrameBufferError> {
    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or(FrameBufferError::Allocation { width, height })?;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(len)
        .map_err(|_| FrameBufferError::Allocation { width, height })?;
    pixels.resize(len, Colour::BLACK);

    Ok(pixels)
}

/// A width×height grid of colours in row-major order.
///
/// `pixels.len() == width * height` holds for the whole lifetime of the
/// buffer. Resizing reallocates and blanks every pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

// A frame always holds at least one pixel, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl FrameBuffer {
    pub fn new(width: i32, height: i32) -> Result<Self, FrameBufferError> {
        let (width, height) = checked_dimensions(width, height)?;
        let pixels = allocate_pixels(width, height)?;

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Reallocates to `width * height` black pixels.
    ///
    /// On error the buffer keeps its previous size and contents.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), FrameBufferError> {
        let (width, height) = checked_dimensions(width, height)?;
        let pixels = allocate_pixels(width, height)?;

        self.width = width;
        self.height = height;
        self.pixels = pixels;

        Ok(())
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} frame",
            x,
            y,
            self.width,
            self.height
        );

        y as usize * self.width as usize + x as usize
    }

    /// Bounds are the caller's responsibility and only checked in debug builds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, colour: Colour) {
        let index = self.index(x, y);
        self.pixels[index] = colour;
    }

    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Colour {
        self.pixels[self.index(x, y)]
    }

    /// Disjoint mutable rows, top to bottom, for rayon workers.
    pub fn rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, Colour> {
        self.pixels.par_chunks_mut(self.width as usize)
    }

    #[must_use]
    pub fn display_len(&self) -> usize {
        self.pixels.len() * BYTES_PER_PIXEL
    }

    /// Packs the frame into a new tightly packed, opaque 4-byte-per-pixel buffer.
    #[must_use]
    pub fn to_display_bytes(&self, format: PixelFormat) -> Vec<u8> {
        let mut bytes = vec![0; self.display_len()];
        self.fill_display_bytes(format, &mut bytes);
        bytes
    }

    /// Same as [`Self::to_display_bytes`] but into a caller-owned slice, such
    /// as a surface's frame.
    pub fn write_display_bytes(
        &self,
        format: PixelFormat,
        dst: &mut [u8],
    ) -> Result<(), FrameBufferError> {
        let expected = self.display_len();

        if dst.len() != expected {
            return Err(FrameBufferError::DisplayLengthMismatch {
                expected,
                actual: dst.len(),
            });
        }

        self.fill_display_bytes(format, dst);
        Ok(())
    }

    fn fill_display_bytes(&self, format: PixelFormat, dst: &mut [u8]) {
        for (colour, dst_pixel) in self
            .pixels
            .iter()
            .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
        {
            format.write_pixel(colour.r, colour.g, colour.b, dst_pixel);
        }
    }
}
