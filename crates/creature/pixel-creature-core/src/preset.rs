//! Creature archetypes: structural parameters plus the style of every feature.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::rng::IntRange;
use crate::theme::ThemeId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetId {
    RoundPlush,
    Bunny,
    Penguin,
    Bug,
    Plant,
    Bear,
    Bee,
    Bat,
}

impl PresetId {
    pub const ALL: [PresetId; 8] = [
        PresetId::RoundPlush,
        PresetId::Bunny,
        PresetId::Penguin,
        PresetId::Bug,
        PresetId::Plant,
        PresetId::Bear,
        PresetId::Bee,
        PresetId::Bat,
    ];

    /// `PRESETS` is declared in variant order.
    #[inline]
    pub fn preset(self) -> &'static Preset {
        &PRESETS[self as usize]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyShape {
    Oval,
    Pear,
    Slim,
    Chubby,
}

impl BodyShape {
    /// Row width multiplier at `progress` in `[0, 1]` from top to bottom.
    pub fn width_factor(self, progress: f64) -> f64 {
        let arc = (progress * PI).sin();
        match self {
            BodyShape::Oval => arc,
            BodyShape::Pear => arc.powf(0.85) * (0.9 + progress * 0.35),
            BodyShape::Slim => arc.powf(0.75) * 0.95,
            BodyShape::Chubby => 0.55 + 0.55 * (progress * PI * 0.9).sin(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EarStyle {
    None,
    Round,
    Pointy,
    Bunny,
    Leaf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessoryStyle {
    None,
    Leaf,
    Flower,
    Sprout,
    Antenna,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WingStyle {
    None,
    Round,
    Bat,
    Bee,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternStyle {
    None,
    Spots,
    Stripes,
    Shell,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailStyle {
    None,
    Stub,
    Leaf,
    Flame,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FootStyle {
    None,
    Small,
    Wide,
}

/// Mouth replacement drawn instead of the generic mouth.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Muzzle {
    None,
    Beak,
    Snout,
}

#[derive(Debug, Serialize)]
pub struct Preset {
    pub id: PresetId,
    pub themes: &'static [ThemeId],
    pub body_height: IntRange,
    pub body_width: IntRange,
    pub body_shape: BodyShape,
    pub belly: bool,
    /// Belly width as a fraction of the body width.
    pub belly_width: f64,
    pub cheeks: bool,
    pub ears: EarStyle,
    pub top_accessory: AccessoryStyle,
    pub wings: WingStyle,
    pub pattern: PatternStyle,
    pub tail: TailStyle,
    pub feet: FootStyle,
    pub arms: bool,
    /// Rows added to the eye row (negative moves the face up).
    pub face_y_offset: i32,
    pub eye_width: IntRange,
    pub eye_height: IntRange,
    /// Horizontal distance from the center to each eye.
    pub eye_offset: IntRange,
    pub muzzle: Muzzle,
}

pub static PRESETS: [Preset; 8] = [
    Preset {
        id: PresetId::RoundPlush,
        themes: &[ThemeId::Candy, ThemeId::Berry],
        body_height: IntRange::new(20, 22),
        body_width: IntRange::new(18, 22),
        body_shape: BodyShape::Oval,
        belly: true,
        belly_width: 0.65,
        cheeks: true,
        ears: EarStyle::Round,
        top_accessory: AccessoryStyle::None,
        wings: WingStyle::None,
        pattern: PatternStyle::None,
        tail: TailStyle::None,
        feet: FootStyle::Small,
        arms: true,
        face_y_offset: 0,
        eye_width: IntRange::fixed(3),
        eye_height: IntRange::fixed(3),
        eye_offset: IntRange::new(6, 7),
        muzzle: Muzzle::None,
    },
    Preset {
        id: PresetId::Bunny,
        themes: &[ThemeId::Candy, ThemeId::Forest],
        body_height: IntRange::new(20, 22),
        body_width: IntRange::new(16, 19),
        body_shape: BodyShape::Pear,
        belly: true,
        belly_width: 0.6,
        cheeks: true,
        ears: EarStyle::Bunny,
        top_accessory: AccessoryStyle::Sprout,
        wings: WingStyle::None,
        pattern: PatternStyle::None,
        tail: TailStyle::Stub,
        feet: FootStyle::Small,
        arms: true,
        face_y_offset: -1,
        eye_width: IntRange::fixed(3),
        eye_height: IntRange::fixed(3),
        eye_offset: IntRange::new(6, 7),
        muzzle: Muzzle::None,
    },
    Preset {
        id: PresetId::Penguin,
        themes: &[ThemeId::Aqua, ThemeId::Midnight],
        body_height: IntRange::new(18, 21),
        body_width: IntRange::new(16, 18),
        body_shape: BodyShape::Oval,
        belly: true,
        belly_width: 0.55,
        cheeks: false,
        ears: EarStyle::None,
        top_accessory: AccessoryStyle::None,
        wings: WingStyle::Round,
        pattern: PatternStyle::None,
        tail: TailStyle::Stub,
        feet: FootStyle::Wide,
        arms: false,
        face_y_offset: -1,
        eye_width: IntRange::fixed(3),
        eye_height: IntRange::fixed(3),
        eye_offset: IntRange::new(5, 6),
        muzzle: Muzzle::Beak,
    },
    Preset {
        id: PresetId::Bug,
        themes: &[ThemeId::Berry, ThemeId::Aqua],
        body_height: IntRange::new(16, 19),
        body_width: IntRange::new(14, 17),
        body_shape: BodyShape::Slim,
        belly: false,
        belly_width: 0.5,
        cheeks: false,
        ears: EarStyle::None,
        top_accessory: AccessoryStyle::Antenna,
        wings: WingStyle::Bat,
        pattern: PatternStyle::Spots,
        tail: TailStyle::None,
        feet: FootStyle::None,
        arms: false,
        face_y_offset: -1,
        eye_width: IntRange::fixed(3),
        eye_height: IntRange::new(2, 3),
        eye_offset: IntRange::new(6, 7),
        muzzle: Muzzle::None,
    },
    Preset {
        id: PresetId::Plant,
        themes: &[ThemeId::Forest],
        body_height: IntRange::new(18, 22),
        body_width: IntRange::new(16, 20),
        body_shape: BodyShape::Pear,
        belly: true,
        belly_width: 0.6,
        cheeks: true,
        ears: EarStyle::Leaf,
        top_accessory: AccessoryStyle::Leaf,
        wings: WingStyle::None,
        pattern: PatternStyle::Spots,
        tail: TailStyle::Leaf,
        feet: FootStyle::Small,
        arms: true,
        face_y_offset: -1,
        eye_width: IntRange::fixed(3),
        eye_height: IntRange::fixed(3),
        eye_offset: IntRange::new(6, 7),
        muzzle: Muzzle::None,
    },
    Preset {
        id: PresetId::Bear,
        themes: &[ThemeId::Earth, ThemeId::Sunny],
        body_height: IntRange::new(19, 22),
        body_width: IntRange::new(20, 22),
        body_shape: BodyShape::Chubby,
        belly: true,
        belly_width: 0.7,
        cheeks: true,
        ears: EarStyle::Round,
        top_accessory: AccessoryStyle::None,
        wings: WingStyle::None,
        pattern: PatternStyle::None,
        tail: TailStyle::Stub,
        feet: FootStyle::Wide,
        arms: true,
        face_y_offset: 0,
        eye_width: IntRange::fixed(3),
        eye_height: IntRange::fixed(3),
        eye_offset: IntRange::new(6, 7),
        muzzle: Muzzle::Snout,
    },
    Preset {
        id: PresetId::Bee,
        themes: &[ThemeId::Sunny],
        body_height: IntRange::new(16, 18),
        body_width: IntRange::new(18, 20),
        body_shape: BodyShape::Oval,
        belly: false,
        belly_width: 0.5,
        cheeks: false,
        ears: EarStyle::None,
        top_accessory: AccessoryStyle::Antenna,
        wings: WingStyle::Bee,
        pattern: PatternStyle::Stripes,
        tail: TailStyle::Flame,
        feet: FootStyle::Small,
        arms: false,
        face_y_offset: -1,
        eye_width: IntRange::fixed(3),
        eye_height: IntRange::new(2, 3),
        eye_offset: IntRange::new(5, 6),
        muzzle: Muzzle::None,
    },
    Preset {
        id: PresetId::Bat,
        themes: &[ThemeId::Midnight, ThemeId::Berry],
        body_height: IntRange::new(18, 20),
        body_width: IntRange::new(18, 20),
        body_shape: BodyShape::Oval,
        belly: false,
        belly_width: 0.5,
        cheeks: false,
        ears: EarStyle::Pointy,
        top_accessory: AccessoryStyle::None,
        wings: WingStyle::Bat,
        pattern: PatternStyle::None,
        tail: TailStyle::None,
        feet: FootStyle::Wide,
        arms: false,
        face_y_offset: -1,
        eye_width: IntRange::fixed(3),
        eye_height: IntRange::fixed(3),
        eye_offset: IntRange::new(6, 7),
        muzzle: Muzzle::None,
    },
];
