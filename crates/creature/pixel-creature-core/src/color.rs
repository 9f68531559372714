//! sRGB colors as written into the markup, plus linear mixing helpers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::hex(0xffffff);
    pub const BLACK: Rgb = Rgb::hex(0x000000);

    /// Build from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Per-channel `self + (target - self) * amount`, rounded and clamped.
    pub fn mix(self, target: Rgb, amount: f64) -> Rgb {
        let channel = |from: u8, to: u8| -> u8 {
            let from = f64::from(from);
            let value = from + (f64::from(to) - from) * amount;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: channel(self.r, target.r),
            g: channel(self.g, target.g),
            b: channel(self.b, target.b),
        }
    }

    #[inline]
    pub fn lighten(self, amount: f64) -> Rgb {
        self.mix(Rgb::WHITE, amount)
    }

    #[inline]
    pub fn darken(self, amount: f64) -> Rgb {
        self.mix(Rgb::BLACK, amount)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Accepts `#rrggbb` or `rrggbb`, either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(s.to_string()))?;
        Ok(Rgb::hex(value))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
