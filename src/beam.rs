//! Directional beams: wedges from a center point out to a rectangle's edge

use crate::config::Color;
use crate::geometry::{Point, Rect};
use crate::project::project_to_edge;
use crate::surface::Surface;
use crate::trig::{Angle, TrigSource};

/// Outline of a beam, in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamPolygon {
    pub center: Point,
    /// Edge point of the trailing ray, `theta - half_width`
    pub undershoot: Point,
    /// Rectangle corner between the two edge points, when they differ
    pub corner: Option<Point>,
    /// Edge point of the leading ray, `theta + half_width`
    pub overshoot: Point,
}

impl BeamPolygon {
    /// `[center, undershoot, corner?, overshoot, center]`
    pub fn vertices(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(5);
        points.push(self.center);
        points.push(self.undershoot);
        points.extend(self.corner);
        points.push(self.overshoot);
        points.push(self.center);
        points
    }
}

/// Build the polygon for a beam along `theta` that is `half_width_degrees`
/// wide on each side.
///
/// The corner is picked per axis: the right (bottom) edge if either point
/// lies on it, else the left (top) edge. That is the shared corner whenever
/// the two points sit on adjacent edges, which holds for beams much narrower
/// than 90°.
pub fn beam_polygon<T: TrigSource + ?Sized>(
    trig: &T,
    rect: Rect,
    center: Point,
    theta: Angle,
    half_width_degrees: i32,
) -> BeamPolygon {
    let half_width = Angle::from_degrees(half_width_degrees);
    let undershoot = project_to_edge(trig, rect, theta - half_width);
    let overshoot = project_to_edge(trig, rect, theta + half_width);

    let corner = (undershoot != overshoot).then(|| {
        let x = if undershoot.x == rect.right() || overshoot.x == rect.right() {
            rect.right()
        } else {
            rect.origin.x
        };
        let y = if undershoot.y == rect.bottom() || overshoot.y == rect.bottom() {
            rect.bottom()
        } else {
            rect.origin.y
        };
        Point::new(x, y)
    });

    BeamPolygon {
        center,
        undershoot,
        corner,
        overshoot,
    }
}

/// Fill a beam with `fill`, then outline it with `stroke`
#[allow(clippy::too_many_arguments)]
pub fn draw_beam<S, T>(
    surface: &mut S,
    trig: &T,
    rect: Rect,
    center: Point,
    theta: Angle,
    half_width_degrees: i32,
    stroke: Color,
    fill: Color,
) where
    S: Surface + ?Sized,
    T: TrigSource + ?Sized,
{
    let vertices = beam_polygon(trig, rect, center, theta, half_width_degrees).vertices();
    surface.fill_polygon(&vertices, fill);
    surface.stroke_polygon(&vertices, stroke);
}
