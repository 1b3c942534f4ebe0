//! Annular arc rasterization.
//!
//! An arc is the ring between `radius - thickness` and `radius`, swept
//! clockwise from a start angle to an end angle. Pixels are tested directly
//! against the ring and against one half-plane per boundary angle; no
//! arctangent is taken.

use std::cmp::Ordering;

use crate::config::Color;
use crate::geometry::Point;
use crate::surface::Surface;
use crate::trig::{Angle, TrigSource, ANGLE_180, ANGLE_270, ANGLE_90, TRIG_MAX_RATIO};

/// Stands in for the undefined slope of a sweep ending at a full turn
const FULL_TURN_SLOPE: f64 = -1_000_000.0;

/// Draw an arc clockwise from `start` to `end`.
///
/// Both angles are normalized; an `end` of zero means a full turn, and a
/// sweep that passes 0° is drawn as two halves. Equal angles draw nothing.
/// `thickness >= radius` gives a filled sector; its center pixel is lit only
/// for a full turn.
#[allow(clippy::too_many_arguments)]
pub fn draw_arc_cw<S, T>(
    surface: &mut S,
    trig: &T,
    center: Point,
    radius: i32,
    thickness: i32,
    start: Angle,
    end: Angle,
    color: Color,
) where
    S: Surface + ?Sized,
    T: TrigSource + ?Sized,
{
    let start = start.normalized();
    let mut end = end.normalized();
    if end == Angle::ZERO {
        end = Angle::FULL;
    }

    match start.cmp(&end) {
        Ordering::Greater => {
            draw_arc_cw(surface, trig, center, radius, thickness, start, Angle::FULL, color);
            draw_arc_cw(surface, trig, center, radius, thickness, Angle::ZERO, end, color);
        }
        Ordering::Equal => {}
        Ordering::Less => {
            let sweep = Sweep::new(trig, radius, thickness, start, end);
            sweep.fill(surface, center, color);
        }
    }
}

/// Same arc traced the other way: `draw_arc_cw` with the angles swapped
#[allow(clippy::too_many_arguments)]
pub fn draw_arc_ccw<S, T>(
    surface: &mut S,
    trig: &T,
    center: Point,
    radius: i32,
    thickness: i32,
    start: Angle,
    end: Angle,
    color: Color,
) where
    S: Surface + ?Sized,
    T: TrigSource + ?Sized,
{
    draw_arc_cw(surface, trig, center, radius, thickness, end, start, color);
}

// ============================================================================
// ANGULAR MEMBERSHIP
// ============================================================================

/// One side of a sweep: its angle and the slope `cos/sin` of its ray
#[derive(Debug, Clone, Copy)]
pub struct Boundary {
    pub angle: Angle,
    pub slope: f64,
}

impl Boundary {
    pub fn new<T: TrigSource + ?Sized>(trig: &T, angle: Angle) -> Self {
        if angle == Angle::FULL {
            return Self {
                angle,
                slope: FULL_TURN_SLOPE,
            };
        }
        let slope = trig.cos(angle) as f64 / trig.sin(angle) as f64;
        Self { angle, slope }
    }
}

/// Whether center-relative `(x, y)` lies clockwise of the start ray.
pub fn past_start(x: i32, y: i32, start: &Boundary) -> bool {
    let a = start.angle.units();
    match y.cmp(&0) {
        // Lower half: start in the lower half must lie behind the point
        Ordering::Greater => a < ANGLE_180 && x as f64 <= y as f64 * start.slope,
        // Upper half: always past a start in the lower half
        Ordering::Less => a <= ANGLE_180 || x as f64 >= y as f64 * start.slope,
        Ordering::Equal => (a <= ANGLE_180 && x < 0) || (a == 0 && x > 0),
    }
}

/// Whether center-relative `(x, y)` lies counter-clockwise of the end ray.
/// The positive x axis belongs to the sweep only when it starts at 0°.
pub fn short_of_end(x: i32, y: i32, start: Angle, end: &Boundary) -> bool {
    let a = end.angle.units();
    match y.cmp(&0) {
        Ordering::Greater => a >= ANGLE_180 || x as f64 >= y as f64 * end.slope,
        Ordering::Less => a > ANGLE_180 && x as f64 <= y as f64 * end.slope,
        Ordering::Equal => (a >= ANGLE_180 && x < 0) || (start == Angle::ZERO && x > 0),
    }
}

// ============================================================================
// SWEEP
// ============================================================================

/// A non-wrapping sweep with `start < end <= FULL`
struct Sweep {
    outer: i32,
    inner: i32,
    start: Boundary,
    end: Boundary,
    x_range: (i32, i32),
    y_range: (i32, i32),
}

impl Sweep {
    fn new<T: TrigSource + ?Sized>(
        trig: &T,
        radius: i32,
        thickness: i32,
        start: Angle,
        end: Angle,
    ) -> Self {
        let inner = (radius - thickness).max(0);
        let ends = [
            (trig.cos(start) as i64, trig.sin(start) as i64),
            (trig.cos(end) as i64, trig.sin(end) as i64),
        ];

        let (mut xmin, mut xmax) = (i64::MAX, i64::MIN);
        let (mut ymin, mut ymax) = (i64::MAX, i64::MIN);
        for r in [radius as i64, inner as i64] {
            for (cos, sin) in ends {
                xmin = xmin.min(r * cos);
                xmax = xmax.max(r * cos);
                ymin = ymin.min(r * sin);
                ymax = ymax.max(r * sin);
            }
        }
        let scale = |v: i64| (v / TRIG_MAX_RATIO as i64) as i32;
        let (mut xmin, xmax) = (scale(xmin), scale(xmax));
        let (mut ymin, mut ymax) = (scale(ymin), scale(ymax));

        // Extremes reached strictly inside the sweep. 0° never is: wrapping
        // sweeps are split before they get here.
        let (s, e) = (start.units(), end.units());
        if s < ANGLE_90 && e > ANGLE_90 {
            ymax = radius;
        }
        if s < ANGLE_180 && e > ANGLE_180 {
            xmin = -radius;
        }
        if s < ANGLE_270 && e > ANGLE_270 {
            ymin = -radius;
        }

        Self {
            outer: radius,
            inner,
            start: Boundary::new(trig, start),
            end: Boundary::new(trig, end),
            x_range: (xmin, xmax),
            y_range: (ymin, ymax),
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        let (x2, y2) = (x as i64 * x as i64, y as i64 * y as i64);
        let d2 = x2 + y2;
        let (outer, inner) = (self.outer as i64, self.inner as i64);
        if d2 >= outer * outer || d2 < inner * inner {
            return false;
        }
        // The origin has no direction; a full turn still covers it
        if x == 0 && y == 0 {
            return self.is_full_turn();
        }
        past_start(x, y, &self.start) && short_of_end(x, y, self.start.angle, &self.end)
    }

    fn is_full_turn(&self) -> bool {
        self.start.angle == Angle::ZERO && self.end.angle == Angle::FULL
    }

    fn fill<S: Surface + ?Sized>(&self, surface: &mut S, center: Point, color: Color) {
        for x in self.x_range.0..=self.x_range.1 {
            for y in self.y_range.0..=self.y_range.1 {
                if self.contains(x, y) {
                    surface.set_pixel(Point::new(center.x + x, center.y + y), color);
                }
            }
        }
    }
}
