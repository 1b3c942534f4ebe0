#![allow(dead_code)]

use std::collections::BTreeSet;

use antikythera::{Canvas, Color, Point};

pub const INK: Color = Color::new(0x20, 0x40, 0x60);

/// In-memory RGBA frame
pub struct Frame {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(&mut self.data, self.width, self.height)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Color {
        let idx = (y as usize * self.width + x as usize) * 4;
        Color::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Lit pixels relative to `origin`
    pub fn lit_around(&self, origin: Point, color: Color) -> BTreeSet<(i32, i32)> {
        let mut out = BTreeSet::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.pixel(x, y) == color {
                    out.insert((x - origin.x, y - origin.y));
                }
            }
        }
        out
    }
}
