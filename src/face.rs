//! Watch face composition.
//!
//! The face is drawn in three passes: background, sky (horizon, sun and moon
//! beams, planets) and time (hands and second markers). Every angle comes in
//! through [`SkyState`] and [`ClockTime`]; nothing here derives positions.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::arc::draw_arc_cw;
use crate::beam::draw_beam;
use crate::config::FaceConfig;
use crate::geometry::{Point, Rect};
use crate::surface::Surface;
use crate::trig::{Angle, TrigSource, ANGLE_180, ANGLE_270, ANGLE_90, TRIG_MAX_RATIO};

// ============================================================================
// INPUTS
// ============================================================================

/// Positions of the bodies, as angles around the face center
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyAngles {
    pub sun: Angle,
    pub moon: Angle,
    pub venus: Angle,
    pub mars: Angle,
    pub jupiter: Angle,
}

/// Everything the sky pass needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkyState {
    /// `None` until the first body position arrives; the sky pass is skipped
    pub bodies: Option<BodyAngles>,
    pub sunrise: Angle,
    pub sunset: Angle,
}

impl Default for SkyState {
    fn default() -> Self {
        Self {
            bodies: None,
            sunrise: Angle::ZERO,
            sunset: Angle(ANGLE_270),
        }
    }
}

/// A single sky update, one per message key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceCommand {
    SetSunrise(Angle),
    SetSunset(Angle),
    SetSun(Angle),
    SetMoon(Angle),
    SetMars(Angle),
    SetVenus(Angle),
    SetJupiter(Angle),
}

impl SkyState {
    pub fn apply(&mut self, command: FaceCommand) {
        match command {
            FaceCommand::SetSunrise(angle) => self.sunrise = angle,
            FaceCommand::SetSunset(angle) => self.sunset = angle,
            FaceCommand::SetSun(angle) => self.bodies_mut().sun = angle,
            FaceCommand::SetMoon(angle) => self.bodies_mut().moon = angle,
            FaceCommand::SetMars(angle) => self.bodies_mut().mars = angle,
            FaceCommand::SetVenus(angle) => self.bodies_mut().venus = angle,
            FaceCommand::SetJupiter(angle) => self.bodies_mut().jupiter = angle,
        }
    }

    fn bodies_mut(&mut self) -> &mut BodyAngles {
        self.bodies.get_or_insert_with(BodyAngles::default)
    }
}

/// Wall-clock time of day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Time of day for a unix timestamp shifted by `utc_offset_minutes`
    pub fn from_unix(secs: u64, utc_offset_minutes: i32) -> Self {
        let local = secs as i64 + utc_offset_minutes as i64 * 60;
        let of_day = local.rem_euclid(86_400) as u32;
        Self::new(of_day / 3600, of_day / 60 % 60, of_day % 60)
    }

    pub fn now(utc_offset_minutes: i32) -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self::from_unix(secs, utc_offset_minutes)
    }
}

// ============================================================================
// FACE
// ============================================================================

#[derive(Debug, Clone)]
pub struct Face {
    config: FaceConfig,
}

impl Face {
    pub fn new(config: FaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn render<S, T>(&self, surface: &mut S, trig: &T, sky: &SkyState, time: ClockTime)
    where
        S: Surface + ?Sized,
        T: TrigSource + ?Sized,
    {
        let bounds = self.config.bounds();
        surface.fill_rect(bounds, self.config.theme.background);
        if let Some(bodies) = sky.bodies {
            self.draw_sky(surface, trig, sky, &bodies);
        }
        self.draw_time(surface, trig, time);
    }

    fn draw_sky<S, T>(&self, surface: &mut S, trig: &T, sky: &SkyState, bodies: &BodyAngles)
    where
        S: Surface + ?Sized,
        T: TrigSource + ?Sized,
    {
        let config = &self.config;
        let theme = &config.theme;
        let bounds = config.bounds();
        let center = bounds.center();

        let horizon = horizon_polygon(trig, bounds, sky.sunrise, sky.sunset);
        surface.fill_polygon(&horizon, theme.horizon);
        surface.stroke_polygon(&horizon, theme.horizon);

        draw_beam(
            surface,
            trig,
            bounds,
            center,
            bodies.sun,
            config.sun_half_width,
            theme.sun_stroke,
            theme.sun_fill,
        );
        draw_beam(
            surface,
            trig,
            bounds,
            center,
            bodies.moon,
            config.moon_half_width,
            theme.moon_stroke,
            theme.moon_fill,
        );

        // Venus points inward; mars is the same marker turned half a turn
        let venus_at = center + polar(trig, config.venus_radius, bodies.venus);
        let venus = marker_triangle(config.venus_size).map(|p| venus_at + p);
        surface.fill_polygon(&venus, theme.planet_fill);
        surface.stroke_polygon(&venus, theme.planet_stroke);

        let mars_at = center + polar(trig, config.mars_radius, bodies.mars);
        let mars = marker_triangle(config.mars_size).map(|p| mars_at - p);
        surface.fill_polygon(&mars, theme.planet_fill);
        surface.stroke_polygon(&mars, theme.planet_stroke);

        let jupiter_at = center + polar(trig, config.jupiter_radius, bodies.jupiter);
        let side = config.jupiter_size * 2;
        let jupiter = Rect::new(jupiter_at.x, jupiter_at.y, side, side);
        surface.fill_rect(jupiter, theme.planet_fill);
        surface.stroke_rect(jupiter, theme.planet_stroke);
    }

    fn draw_time<S, T>(&self, surface: &mut S, trig: &T, time: ClockTime)
    where
        S: Surface + ?Sized,
        T: TrigSource + ?Sized,
    {
        let config = &self.config;
        let theme = &config.theme;
        let center = config.bounds().center();

        surface.fill_circle(center, config.time_disc_radius, theme.time_disc);

        for position in second_marker_positions(time.second) {
            // Seconds on a dial with 0 at twelve o'clock
            let angle = Angle(position as i32 * ANGLE_180 / 30);
            let offset = Point::new(
                config.second_radius * trig.sin(angle) / TRIG_MAX_RATIO,
                -(config.second_radius * trig.cos(angle) / TRIG_MAX_RATIO),
            );
            surface.fill_circle(center + offset, config.second_dot_radius, theme.hands);
        }

        let twelve = Angle(-ANGLE_90);
        let hour = Angle(time.hour as i32 * ANGLE_180 / 6) + twelve;
        let minute = Angle(time.minute as i32 * ANGLE_180 / 30) + twelve;
        draw_arc_cw(
            surface,
            trig,
            center,
            config.hour_radius,
            config.hour_thickness,
            twelve,
            hour,
            theme.hands,
        );
        draw_arc_cw(
            surface,
            trig,
            center,
            config.minute_radius,
            config.minute_thickness,
            twelve,
            minute,
            theme.hands,
        );
    }
}

/// Dial positions (in seconds) of the markers lit at `second`.
///
/// Markers fill in every two seconds for the first half minute, then empty
/// out again over the second half.
pub fn second_marker_positions(second: u32) -> Vec<u32> {
    let lit = second / 2;
    if lit % 30 == 0 {
        return Vec::new();
    }
    let range = if lit <= 15 { 1..=lit } else { (lit % 15 + 1)..=15 };
    range.map(|i| i * 4).collect()
}

/// Sky polygon below the horizon line through sunrise, center and sunset
pub fn horizon_polygon<T: TrigSource + ?Sized>(
    trig: &T,
    bounds: Rect,
    sunrise: Angle,
    sunset: Angle,
) -> [Point; 5] {
    let center = bounds.center();
    let rise = center.y - horizon_rise(trig, bounds, sunrise);
    let set = center.y - horizon_rise(trig, bounds, sunset);
    [
        Point::new(bounds.origin.x, rise),
        center,
        Point::new(bounds.right(), set),
        Point::new(bounds.right(), bounds.bottom()),
        Point::new(bounds.origin.x, bounds.bottom()),
    ]
}

/// `width/2 * tan(angle)`, saturating to the rect height where the tangent
/// is undefined
fn horizon_rise<T: TrigSource + ?Sized>(trig: &T, bounds: Rect, angle: Angle) -> i32 {
    let (sin, cos) = (trig.sin(angle) as i64, trig.cos(angle) as i64);
    if cos == 0 {
        return bounds.height * sin.signum() as i32;
    }
    (bounds.width as i64 * sin / (2 * cos)) as i32
}

/// Offset of length `radius` along `angle`
fn polar<T: TrigSource + ?Sized>(trig: &T, radius: i32, angle: Angle) -> Point {
    Point::new(
        radius * trig.cos(angle) / TRIG_MAX_RATIO,
        radius * trig.sin(angle) / TRIG_MAX_RATIO,
    )
}

fn marker_triangle(size: i32) -> [Point; 3] {
    [
        Point::new(-size, -size * 2),
        Point::new(size, -size * 2),
        Point::new(0, 0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trig::FixedTrig;

    #[test]
    fn markers_fill_then_empty() {
        assert!(second_marker_positions(0).is_empty());
        assert!(second_marker_positions(1).is_empty());
        assert_eq!(second_marker_positions(2), vec![4]);
        assert_eq!(second_marker_positions(7), vec![4, 8, 12]);
        assert_eq!(second_marker_positions(30).len(), 15);
        assert_eq!(second_marker_positions(32), (2..=15).map(|i| i * 4).collect::<Vec<_>>());
        assert_eq!(second_marker_positions(58), vec![60]);
    }

    #[test]
    fn sky_is_uninitialized_until_a_body_arrives() {
        let mut sky = SkyState::default();
        sky.apply(FaceCommand::SetSunrise(Angle::DEG_180));
        assert_eq!(sky.bodies, None);
        assert_eq!(sky.sunrise, Angle::DEG_180);

        sky.apply(FaceCommand::SetMoon(Angle::DEG_45));
        let bodies = sky.bodies.unwrap();
        assert_eq!(bodies.moon, Angle::DEG_45);
        assert_eq!(bodies.sun, Angle::ZERO);
    }

    #[test]
    fn clock_time_from_unix() {
        // 1970-01-02 13:45:30 UTC
        let secs = 86_400 + 13 * 3600 + 45 * 60 + 30;
        assert_eq!(ClockTime::from_unix(secs, 0), ClockTime::new(13, 45, 30));
        assert_eq!(ClockTime::from_unix(secs, 60), ClockTime::new(14, 45, 30));
        assert_eq!(ClockTime::from_unix(secs, -14 * 60), ClockTime::new(23, 45, 30));
    }

    #[test]
    fn horizon_through_center() {
        let trig = FixedTrig::new();
        let bounds = Rect::new(0, 0, 144, 168);
        let poly = horizon_polygon(&trig, bounds, Angle::ZERO, Angle::DEG_180);
        assert_eq!(poly[0], Point::new(0, 84));
        assert_eq!(poly[1], Point::new(72, 84));
        assert_eq!(poly[2], Point::new(144, 84));
        assert_eq!(poly[3], Point::new(144, 168));
    }

    #[test]
    fn vertical_horizon_saturates() {
        let trig = FixedTrig::new();
        let bounds = Rect::new(0, 0, 144, 168);
        let poly = horizon_polygon(&trig, bounds, Angle::DEG_90, Angle::DEG_270);
        assert_eq!(poly[0].y, 84 - 168);
        assert_eq!(poly[2].y, 84 + 168);
    }
}
