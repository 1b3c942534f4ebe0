//! Drawing targets.
//!
//! [`Surface`] is everything the arc and beam renderers need from a target.
//! [`Canvas`] implements it over an RGBA8 frame such as the one handed out
//! by `pixels::Pixels::frame_mut`. Writes never blend; the last write wins
//! and coordinates outside the frame are dropped.

use crate::config::Color;
use crate::geometry::{Point, Rect};

pub trait Surface {
    fn set_pixel(&mut self, point: Point, color: Color);

    /// Fill the closed polygon through `points` (even-odd rule)
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Outline the closed polygon through `points`
    fn stroke_polygon(&mut self, points: &[Point], color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline the pixels just inside `rect`
    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let (left, top) = (rect.origin.x, rect.origin.y);
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
        self.stroke_polygon(
            &[
                Point::new(left, top),
                Point::new(right, top),
                Point::new(right, bottom),
                Point::new(left, bottom),
            ],
            color,
        );
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
        for y in -radius..=radius {
            for x in -radius..=radius {
                if x * x + y * y <= radius * radius {
                    self.set_pixel(center + Point::new(x, y), color);
                }
            }
        }
    }
}

// ============================================================================
// CANVAS
// ============================================================================

pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// `frame` holds `width * height` RGBA pixels, row-major
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert!(frame.len() >= width * height * 4);
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color.to_rgba());
        }
    }

    pub fn pixel(&self, point: Point) -> Option<Color> {
        let idx = self.index(point)?;
        let px = &self.frame[idx..idx + 4];
        Some(Color::new(px[0], px[1], px[2]))
    }

    fn index(&self, point: Point) -> Option<usize> {
        let (x, y) = (usize::try_from(point.x).ok()?, usize::try_from(point.y).ok()?);
        (x < self.width && y < self.height).then(|| (y * self.width + x) * 4)
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let (dx, dy) = ((to.x - from.x).abs(), -(to.y - from.y).abs());
        let (sx, sy) = ((to.x - from.x).signum(), (to.y - from.y).signum());
        let mut err = dx + dy;
        let mut p = from;
        loop {
            self.set_pixel(p, color);
            if p == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                p.x += sx;
            }
            if e2 <= dx {
                err += dx;
                p.y += sy;
            }
        }
    }
}

impl Surface for Canvas<'_> {
    fn set_pixel(&mut self, point: Point, color: Color) {
        if let Some(idx) = self.index(point) {
            self.frame[idx..idx + 4].copy_from_slice(&color.to_rgba());
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let max_y = points
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(0)
            .min(self.height as i32 - 1);

        let mut crossings = Vec::with_capacity(points.len());
        for y in min_y..=max_y {
            // Sample through pixel centers
            let sample = y as f64 + 0.5;
            crossings.clear();
            for (i, &a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if let Some(x) = edge_crossing(a, b, sample) {
                    crossings.push(x);
                }
            }
            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                let first = (span[0] - 0.5).ceil() as i32;
                let last = (span[1] - 0.5).ceil() as i32 - 1;
                for x in first.max(0)..=last.min(self.width as i32 - 1) {
                    self.set_pixel(Point::new(x, y), color);
                }
            }
        }
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color) {
        match points {
            [] => {}
            [only] => self.set_pixel(*only, color),
            _ => {
                for (i, &a) in points.iter().enumerate() {
                    let b = points[(i + 1) % points.len()];
                    self.draw_line(a, b, color);
                }
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x_range = rect.origin.x.max(0)..rect.right().min(self.width as i32);
        for y in rect.origin.y.max(0)..rect.bottom().min(self.height as i32) {
            for x in x_range.clone() {
                self.set_pixel(Point::new(x, y), color);
            }
        }
    }
}

/// X where segment `a`-`b` crosses the horizontal line at `y`, half-open in y
fn edge_crossing(a: Point, b: Point, y: f64) -> Option<f64> {
    let (y1, y2) = (a.y as f64, b.y as f64);
    if (y1 <= y && y < y2) || (y2 <= y && y < y1) {
        let t = (y - y1) / (y2 - y1);
        Some(a.x as f64 + t * (b.x - a.x) as f64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(0xff, 0, 0);

    fn lit(canvas: &Canvas, color: Color) -> Vec<Point> {
        let mut out = Vec::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.pixel(Point::new(x, y)) == Some(color) {
                    out.push(Point::new(x, y));
                }
            }
        }
        out
    }

    #[test]
    fn set_pixel_clips_out_of_bounds() {
        let mut frame = vec![0; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        canvas.set_pixel(Point::new(-1, 0), RED);
        canvas.set_pixel(Point::new(4, 0), RED);
        canvas.set_pixel(Point::new(0, 4), RED);
        canvas.set_pixel(Point::new(3, 3), RED);
        assert_eq!(lit(&canvas, RED), vec![Point::new(3, 3)]);
        assert_eq!(canvas.pixel(Point::new(9, 9)), None);
    }

    #[test]
    fn fill_rect_covers_exact_area() {
        let mut frame = vec![0; 10 * 10 * 4];
        let mut canvas = Canvas::new(&mut frame, 10, 10);
        canvas.fill_rect(Rect::new(2, 3, 4, 2), RED);
        assert_eq!(lit(&canvas, RED).len(), 8);
        assert_eq!(canvas.pixel(Point::new(5, 4)), Some(RED));
        assert_eq!(canvas.pixel(Point::new(6, 4)), Some(Color::new(0, 0, 0)));
    }

    #[test]
    fn fill_polygon_square() {
        let mut frame = vec![0; 10 * 10 * 4];
        let mut canvas = Canvas::new(&mut frame, 10, 10);
        let square = [
            Point::new(2, 2),
            Point::new(6, 2),
            Point::new(6, 6),
            Point::new(2, 6),
        ];
        canvas.fill_polygon(&square, RED);
        assert_eq!(lit(&canvas, RED).len(), 16);
    }

    #[test]
    fn zero_area_polygon_fills_nothing() {
        let mut frame = vec![0; 10 * 10 * 4];
        let mut canvas = Canvas::new(&mut frame, 10, 10);
        let sliver = [
            Point::new(5, 5),
            Point::new(9, 1),
            Point::new(9, 1),
            Point::new(5, 5),
        ];
        canvas.fill_polygon(&sliver, RED);
        assert!(lit(&canvas, RED).is_empty());
    }

    #[test]
    fn stroke_closes_the_path() {
        let mut frame = vec![0; 10 * 10 * 4];
        let mut canvas = Canvas::new(&mut frame, 10, 10);
        canvas.stroke_rect(Rect::new(1, 1, 4, 3), RED);
        let lit = lit(&canvas, RED);
        assert_eq!(lit.len(), 10);
        assert!(lit.contains(&Point::new(1, 2)));
        assert!(lit.contains(&Point::new(4, 3)));
        assert!(!lit.contains(&Point::new(2, 2)));
    }

    #[test]
    fn fill_circle_is_symmetric() {
        let mut frame = vec![0; 9 * 9 * 4];
        let mut canvas = Canvas::new(&mut frame, 9, 9);
        canvas.fill_circle(Point::new(4, 4), 2, RED);
        let lit = lit(&canvas, RED);
        assert_eq!(lit.len(), 13);
        assert!(lit.contains(&Point::new(4, 2)));
        assert!(!lit.contains(&Point::new(2, 2)));
    }
}
