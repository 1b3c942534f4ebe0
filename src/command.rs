//! Text form of sky updates.
//!
//! One update per line: `<key> <value>`. The key is a name (`sun`,
//! `sunrise`, ...) or its numeric message key (`3`, `0x03`). The value is raw
//! angle units, or whole degrees with a `deg` suffix.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::face::FaceCommand;
use crate::trig::Angle;

/// Message keys of the sky dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkyKey {
    Sunrise = 0x01,
    Sunset = 0x02,
    Sun = 0x03,
    Moon = 0x04,
    Mars = 0x05,
    Venus = 0x06,
    Jupiter = 0x07,
}

impl SkyKey {
    pub const ALL: [SkyKey; 7] = [
        SkyKey::Sunrise,
        SkyKey::Sunset,
        SkyKey::Sun,
        SkyKey::Moon,
        SkyKey::Mars,
        SkyKey::Venus,
        SkyKey::Jupiter,
    ];

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|key| *key as u32 == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            SkyKey::Sunrise => "sunrise",
            SkyKey::Sunset => "sunset",
            SkyKey::Sun => "sun",
            SkyKey::Moon => "moon",
            SkyKey::Mars => "mars",
            SkyKey::Venus => "venus",
            SkyKey::Jupiter => "jupiter",
        }
    }

    pub fn command(self, angle: Angle) -> FaceCommand {
        match self {
            SkyKey::Sunrise => FaceCommand::SetSunrise(angle),
            SkyKey::Sunset => FaceCommand::SetSunset(angle),
            SkyKey::Sun => FaceCommand::SetSun(angle),
            SkyKey::Moon => FaceCommand::SetMoon(angle),
            SkyKey::Mars => FaceCommand::SetMars(angle),
            SkyKey::Venus => FaceCommand::SetVenus(angle),
            SkyKey::Jupiter => FaceCommand::SetJupiter(angle),
        }
    }
}

impl FromStr for SkyKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        let code = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => s.parse::<u32>().ok(),
        };
        let found = match code {
            Some(code) => SkyKey::from_code(code),
            None => Self::ALL
                .into_iter()
                .find(|key| key.name().eq_ignore_ascii_case(s)),
        };
        found.ok_or_else(|| format!("unknown key {s:?}"))
    }
}

impl FromStr for FaceCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let malformed = |reason: String| Error::Command {
            line: line.to_string(),
            reason,
        };

        let mut parts = line.split_whitespace();
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed("expected `<key> <value>`".to_string()));
        };

        let key: SkyKey = key.parse().map_err(malformed)?;
        let angle = parse_angle(value).map_err(malformed)?;
        Ok(key.command(angle))
    }
}

fn parse_angle(value: &str) -> Result<Angle, String> {
    let (digits, degrees) = match value.strip_suffix("deg") {
        Some(digits) => (digits, true),
        None => (value, false),
    };
    let n: i32 = digits
        .parse()
        .map_err(|err| format!("bad angle {value:?}: {err}"))?;
    Ok(if degrees {
        Angle::from_degrees(n)
    } else {
        Angle(n)
    })
}
