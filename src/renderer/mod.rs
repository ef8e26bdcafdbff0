//! Software rendering module
//!
//! Everything is drawn by writing bytes straight into a `PixelBuffer`; the
//! presenter on the other side only ever sees the finished frame.

pub mod pixel_buffer;
pub mod shapes;

pub use pixel_buffer::PixelBuffer;
pub use shapes::{fill_circle, fill_rect};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// An RGB color. The buffer's alpha byte is never touched by draw calls.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
