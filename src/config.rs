use bon::Builder;
use std::time::Duration;

use crate::geometry::Rect;

/// Color representation for face elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

/// Colors for every layer of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub horizon: Color,
    pub sun_stroke: Color,
    pub sun_fill: Color,
    pub moon_stroke: Color,
    pub moon_fill: Color,
    pub planet_stroke: Color,
    pub planet_fill: Color,
    pub time_disc: Color,
    pub hands: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            horizon: Color::BLACK,
            sun_stroke: Color::BLACK,
            sun_fill: Color::WHITE,
            moon_stroke: Color::WHITE,
            moon_fill: Color::BLACK,
            planet_stroke: Color::BLACK,
            planet_fill: Color::WHITE,
            time_disc: Color::WHITE,
            hands: Color::BLACK,
        }
    }
}

/// Geometry, colors and viewer settings of the watch face
#[derive(Debug, Clone, Builder)]
pub struct FaceConfig {
    #[builder(default = "Antikythera".to_string())]
    pub title: String,

    // Face surface
    #[builder(default = 144)]
    pub width: i32,
    #[builder(default = 168)]
    pub height: i32,

    // Hands
    #[builder(default = 10)]
    pub hour_radius: i32,
    #[builder(default = 3)]
    pub hour_thickness: i32,
    #[builder(default = 18)]
    pub minute_radius: i32,
    #[builder(default = 3)]
    pub minute_thickness: i32,
    #[builder(default = 25)]
    pub second_radius: i32,
    #[builder(default = 3)]
    pub second_dot_radius: i32,
    #[builder(default = 27)]
    pub time_disc_radius: i32,

    // Beams, half-widths in degrees
    #[builder(default = 10)]
    pub sun_half_width: i32,
    #[builder(default = 10)]
    pub moon_half_width: i32,

    // Planets
    #[builder(default = 7)]
    pub venus_size: i32,
    #[builder(default = 32)]
    pub venus_radius: i32,
    #[builder(default = 7)]
    pub mars_size: i32,
    #[builder(default = 63)]
    pub mars_radius: i32,
    #[builder(default = 7)]
    pub jupiter_size: i32,
    #[builder(default = 75)]
    pub jupiter_radius: i32,

    #[builder(default)]
    pub theme: Theme,

    // Viewer
    #[builder(default = 3)]
    pub window_scale: u32,
    #[builder(default = Duration::from_secs(1))]
    pub redraw_interval: Duration,
    #[builder(default = 0)]
    pub utc_offset_minutes: i32,
}

impl FaceConfig {
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
