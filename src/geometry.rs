//! Integer pixel geometry

use std::ops::{Add, Neg, Sub};

/// Pixel coordinate. Surface-relative or center-relative depending on the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Axis-aligned rectangle: origin plus size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    pub const fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2,
            self.origin.y + self.height / 2,
        )
    }

    /// x of the right edge line (one past the last column)
    pub const fn right(&self) -> i32 {
        self.origin.x + self.width
    }

    /// y of the bottom edge line (one past the last row)
    pub const fn bottom(&self) -> i32 {
        self.origin.y + self.height
    }

    /// Whether `p` lies on one of the four edge lines, within the rect's span
    pub fn on_boundary(&self, p: Point) -> bool {
        let within_x = (self.origin.x..=self.right()).contains(&p.x);
        let within_y = (self.origin.y..=self.bottom()).contains(&p.y);
        (within_y && (p.x == self.origin.x || p.x == self.right()))
            || (within_x && (p.y == self.origin.y || p.y == self.bottom()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_and_edges() {
        let rect = Rect::new(10, 20, 144, 168);
        assert_eq!(rect.center(), Point::new(82, 104));
        assert_eq!(rect.right(), 154);
        assert_eq!(rect.bottom(), 188);
    }

    #[test]
    fn boundary_membership() {
        let rect = Rect::new(0, 0, 100, 50);
        assert!(rect.on_boundary(Point::new(100, 25)));
        assert!(rect.on_boundary(Point::new(0, 50)));
        assert!(rect.on_boundary(Point::new(40, 0)));
        assert!(!rect.on_boundary(Point::new(40, 25)));
        assert!(!rect.on_boundary(Point::new(100, 51)));
    }

    #[test]
    fn point_arithmetic() {
        let p = Point::new(3, -4) + Point::new(1, 1);
        assert_eq!(p, Point::new(4, -3));
        assert_eq!(-p, Point::new(-4, 3));
        assert_eq!(p - Point::new(4, -3), Point::default());
    }
}
