//! Projection of a direction onto the boundary of a rectangle

use crate::geometry::{Point, Rect};
use crate::trig::{Angle, TrigSource, ANGLE_45};

/// Which side of the rectangle a ray leaves through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Right,
    Bottom,
    Left,
    Top,
}

impl Edge {
    /// Octant lookup. Each range is closed on its clockwise end, so 45°
    /// belongs to the right edge and 135° to the bottom.
    pub fn for_angle(angle: Angle) -> Self {
        let a = angle.normalized().units();
        if a <= ANGLE_45 || a > 7 * ANGLE_45 {
            Edge::Right
        } else if a <= 3 * ANGLE_45 {
            Edge::Bottom
        } else if a <= 5 * ANGLE_45 {
            Edge::Left
        } else {
            Edge::Top
        }
    }
}

/// Point where a ray from the center of `rect` heading along `angle` meets
/// the rectangle's boundary.
///
/// The edge coordinate is always one of `rect.origin`, `rect.right()` or
/// `rect.bottom()`, so odd sizes land on the same lines the beam corner uses.
pub fn project_to_edge<T: TrigSource + ?Sized>(trig: &T, rect: Rect, angle: Angle) -> Point {
    let center = rect.center();
    let (w, h) = (rect.width as i64, rect.height as i64);
    let sin = trig.sin(angle) as i64;
    let cos = trig.cos(angle) as i64;

    // Left/right divide by cos, top/bottom by sin; neither is zero in its octant
    match Edge::for_angle(angle) {
        Edge::Right => Point::new(rect.right(), center.y + (w * sin / cos / 2) as i32),
        Edge::Left => Point::new(rect.origin.x, center.y - (w * sin / cos / 2) as i32),
        Edge::Bottom => Point::new(center.x + (h * cos / sin / 2) as i32, rect.bottom()),
        Edge::Top => Point::new(center.x - (h * cos / sin / 2) as i32, rect.origin.y),
    }
}
