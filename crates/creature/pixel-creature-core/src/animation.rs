//! Declarative animation directives: wing flap, eye blink, whole-body bounce.
//!
//! Every duration and delay is drawn from the generation's RNG and kept at the
//! two-decimal value written into the markup, so timing is reproducible from
//! the seed.

use serde::{Deserialize, Serialize};

use crate::canvas::{Pixel, PIXEL_SIZE};
use crate::face::EyeBox;
use crate::rng::XorShift32;

/// Key times of the blink overlay; the lid is fully closed at 0.88.
pub const BLINK_KEY_TIMES: [f64; 5] = [0.0, 0.82, 0.88, 0.94, 1.0];

/// The value `{:.2}` prints, read back. Formatting rounds the exact binary
/// value, so `1.045` (stored just below) becomes `1.04`.
pub fn round_centis(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

/// Vertical oscillation `0 -> -amplitude -> 0` in output units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flap {
    pub amplitude: i32,
    pub duration: f64,
    pub begin: f64,
}

/// One wing, drawn and animated as an independent group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WingGroup {
    pub side: Side,
    pub pixels: Vec<Pixel>,
    pub flap: Flap,
}

/// Lid overlay on one eye box collapsing the eye for a short window.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Blink {
    pub eye: EyeBox,
    pub duration: f64,
    pub delay: f64,
}

/// Whole-image oscillation `0 -> +amplitude -> 0`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounce {
    pub amplitude: i32,
    pub duration: f64,
}

/// Shared duration in `[1.4, 2.0)`; the right wing starts half a cycle late.
/// The half is left unrounded and only rounded when printed.
pub fn flap_pair(rng: &mut XorShift32) -> (Flap, Flap) {
    let duration = round_centis(1.4 + rng.next_f64() * 0.6);
    let left = Flap {
        amplitude: PIXEL_SIZE,
        duration,
        begin: 0.0,
    };
    let right = Flap {
        begin: duration / 2.0,
        ..left
    };
    (left, right)
}

/// Independent delay and duration (`[1.8, 3.2)`) per eye.
pub fn blinks(eyes: &[EyeBox], rng: &mut XorShift32) -> Vec<Blink> {
    eyes.iter()
        .enumerate()
        .map(|(index, eye)| {
            let delay = round_centis(rng.next_f64() * 0.8 + index as f64 * 0.2);
            let duration = round_centis(1.8 + rng.next_f64() * 1.4);
            Blink {
                eye: *eye,
                duration,
                delay,
            }
        })
        .collect()
}

/// Duration in `[2.4, 4.4)`.
pub fn bounce(rng: &mut XorShift32) -> Bounce {
    Bounce {
        amplitude: PIXEL_SIZE,
        duration: round_centis(2.4 + rng.next_f64() * 2.0),
    }
}
