//! The fixed-size pixel buffer the simulation rasterizes into.

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geometry::GridPoint;
use bevy::prelude::Resource;

/// `SCREEN_HEIGHT × SCREEN_WIDTH` packed `0xRRGGBB` pixels, row-major by `x`,
/// origin top-left.
///
/// Cleared and fully repainted every frame; nothing in the simulation reads it.
#[derive(Resource, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Vec<u32>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("rows", &SCREEN_HEIGHT)
            .field("cols", &SCREEN_WIDTH)
            .finish()
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![0; (SCREEN_HEIGHT * SCREEN_WIDTH) as usize],
        }
    }

    #[inline]
    fn index(point: GridPoint) -> Option<usize> {
        if point.x < SCREEN_HEIGHT && point.y < SCREEN_WIDTH {
            Some((point.x * SCREEN_WIDTH + point.y) as usize)
        } else {
            None
        }
    }

    /// Set every pixel to black.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Write one pixel.  Writes outside the field are clipped.
    #[inline]
    pub fn put(&mut self, point: GridPoint, color: u32) {
        if let Some(i) = Self::index(point) {
            self.pixels[i] = color;
        }
    }

    /// Signed variant of [`put`](Self::put) for rasterizers that work around a centre.
    #[inline]
    pub fn put_signed(&mut self, x: i64, y: i64, color: u32) {
        if x >= 0 && y >= 0 {
            self.put(GridPoint::new(x as u32, y as u32), color);
        }
    }

    /// Read one pixel; `None` outside the field.
    pub fn get(&self, point: GridPoint) -> Option<u32> {
        Self::index(point).map(|i| self.pixels[i])
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Expand to tightly packed RGBA8 bytes for texture upload.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &p in &self.pixels {
            bytes.extend_from_slice(&[(p >> 16) as u8, (p >> 8) as u8, p as u8, 0xFF]);
        }
        bytes
    }
}
