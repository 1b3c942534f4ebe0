//! Fixed-point trigonometry on a 16-bit circular scale.
//!
//! A full turn is [`FULL_TURN`] units, 0 points along +x and angles grow
//! clockwise on screen (+y is down). Lookups return the ratio scaled by
//! [`TRIG_MAX_RATIO`], so `r * sin(a) / TRIG_MAX_RATIO` is a pixel offset.

use std::f64::consts::TAU;
use std::ops::{Add, Sub};

/// Units in one full turn
pub const FULL_TURN: i32 = 0x10000;
/// Magnitude of a unit sine/cosine result
pub const TRIG_MAX_RATIO: i32 = 0xffff;

pub const ANGLE_45: i32 = FULL_TURN / 8;
pub const ANGLE_90: i32 = FULL_TURN / 4;
pub const ANGLE_180: i32 = FULL_TURN / 2;
pub const ANGLE_270: i32 = 3 * FULL_TURN / 4;

const QUARTER: usize = ANGLE_90 as usize;

// ============================================================================
// ANGLE
// ============================================================================

/// Angle in turn units. May hold any integer until normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(pub i32);

impl Angle {
    pub const ZERO: Angle = Angle(0);
    pub const DEG_45: Angle = Angle(ANGLE_45);
    pub const DEG_90: Angle = Angle(ANGLE_90);
    pub const DEG_180: Angle = Angle(ANGLE_180);
    pub const DEG_270: Angle = Angle(ANGLE_270);
    /// One full turn; only meaningful as the closed end of a sweep
    pub const FULL: Angle = Angle(FULL_TURN);

    pub const fn units(self) -> i32 {
        self.0
    }

    /// Whole degrees to turn units, truncating
    pub const fn from_degrees(degrees: i32) -> Self {
        Self((degrees as i64 * FULL_TURN as i64 / 360) as i32)
    }

    pub fn to_degrees(self) -> f64 {
        self.0 as f64 * 360.0 / FULL_TURN as f64
    }

    /// Fold into `[0, FULL_TURN)`
    pub const fn normalized(self) -> Self {
        Self(self.0.rem_euclid(FULL_TURN))
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0.wrapping_sub(rhs.0))
    }
}

// ============================================================================
// TRIG SOURCES
// ============================================================================

/// Sine/cosine provider on the fixed circular scale.
///
/// Results are in `[-TRIG_MAX_RATIO, TRIG_MAX_RATIO]`. Implementations must
/// accept any angle and normalize it themselves.
pub trait TrigSource {
    fn sin(&self, angle: Angle) -> i32;

    fn cos(&self, angle: Angle) -> i32 {
        self.sin(angle + Angle::DEG_90)
    }
}

/// Quarter-wave lookup table
#[derive(Debug, Clone)]
pub struct FixedTrig {
    quarter: Vec<i32>,
}

impl FixedTrig {
    pub fn new() -> Self {
        let quarter = (0..=QUARTER)
            .map(|i| scaled_sin(i as f64 * TAU / FULL_TURN as f64))
            .collect();
        Self { quarter }
    }
}

impl Default for FixedTrig {
    fn default() -> Self {
        Self::new()
    }
}

impl TrigSource for FixedTrig {
    fn sin(&self, angle: Angle) -> i32 {
        let a = angle.normalized().units() as usize;
        let (quadrant, offset) = (a / QUARTER, a % QUARTER);
        match quadrant {
            0 => self.quarter[offset],
            1 => self.quarter[QUARTER - offset],
            2 => -self.quarter[offset],
            _ => -self.quarter[QUARTER - offset],
        }
    }
}

/// Computes every lookup with `f64::sin`; same scale as [`FixedTrig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatTrig;

impl TrigSource for FloatTrig {
    fn sin(&self, angle: Angle) -> i32 {
        let a = angle.normalized().units();
        scaled_sin(a as f64 * TAU / FULL_TURN as f64)
    }
}

fn scaled_sin(radians: f64) -> i32 {
    (radians.sin() * TRIG_MAX_RATIO as f64).round() as i32
}
