//! RGBA byte buffer with a bounds-checked pixel write
//!
//! Layout is row-major, 4 bytes per pixel in R, G, B, A order. The buffer is
//! allocated once and cleared in place every frame.

use std::ops::Range;

use super::Color;
use crate::consts::BYTES_PER_PIXEL;

/// Frame buffer handed to the presenter once per frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer of `width * height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, as expected by texture uploads
    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel slots a write may land on. The guard below rejects the last one.
    #[inline]
    fn writable(&self) -> i128 {
        self.width as i128 * self.height as i128 - 1
    }

    /// Write the RGB channels of one pixel.
    ///
    /// Only the linear offset is checked: it must satisfy
    /// `0 <= idx < len - 4`. An x past the row end therefore lands on the next
    /// row, and the very last pixel of the buffer is never written. Writes
    /// that fail the check are dropped without error.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.plot(x as i64, y as i64, color);
    }

    /// `set_pixel` over wide coordinates; the offset math cannot overflow
    pub fn plot(&mut self, x: i64, y: i64, color: Color) {
        let slot = y as i128 * self.width as i128 + x as i128;
        if slot >= 0 && slot < self.writable() {
            let idx = slot as usize * BYTES_PER_PIXEL;
            self.pixels[idx..idx + 3].copy_from_slice(bytemuck::bytes_of(&color));
        }
    }

    /// Part of `[x0, x1)` on row `y` whose writes would pass the guard
    pub fn clip_span(&self, y: i64, x0: i64, x1: i64) -> Range<i64> {
        let base = y as i128 * self.width as i128;
        let lo = (x0 as i128).max(-base);
        let hi = (x1 as i128).min(self.writable() - base);
        if lo >= hi {
            return 0..0;
        }
        // Both ends lie within [x0, x1]
        lo as i64..hi as i64
    }

    /// Rows of `[y0, y1)` where some x in `[x0, x1)` would pass the guard
    pub fn clip_rows(&self, y0: i64, y1: i64, x0: i64, x1: i64) -> Range<i64> {
        if self.width == 0 {
            return 0..0;
        }
        let w = self.width as i128;
        // y * w + x1 > 0  and  y * w + x0 < writable
        let first = (-(x1 as i128)).div_euclid(w) + 1;
        let end = -((x0 as i128 - self.writable()).div_euclid(w));
        let lo = (y0 as i128).max(first);
        let hi = (y1 as i128).min(end);
        if lo >= hi {
            return 0..0;
        }
        lo as i64..hi as i64
    }

    /// Read back the four bytes of a pixel (None outside the buffer)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[idx..idx + BYTES_PER_PIXEL]);
        Some(px)
    }

    /// Zero every byte, alpha included
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }
}
