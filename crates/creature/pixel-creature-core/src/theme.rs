//! The seven fixed color themes.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Candy,
    Forest,
    Aqua,
    Sunny,
    Berry,
    Midnight,
    Earth,
}

impl ThemeId {
    pub const ALL: [ThemeId; 7] = [
        ThemeId::Candy,
        ThemeId::Forest,
        ThemeId::Aqua,
        ThemeId::Sunny,
        ThemeId::Berry,
        ThemeId::Midnight,
        ThemeId::Earth,
    ];

    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeId::Candy => &CANDY,
            ThemeId::Forest => &FOREST,
            ThemeId::Aqua => &AQUA,
            ThemeId::Sunny => &SUNNY,
            ThemeId::Berry => &BERRY,
            ThemeId::Midnight => &MIDNIGHT,
            ThemeId::Earth => &EARTH,
        }
    }
}

/// Candidate colors for one theme. `eye` and `outline` may be absent, in which
/// case palette resolution falls back to global defaults.
#[derive(Debug, Serialize)]
pub struct Theme {
    pub body: &'static [Rgb],
    pub belly: &'static [Rgb],
    pub accent: &'static [Rgb],
    pub eye: Option<&'static [Rgb]>,
    pub outline: Option<Rgb>,
}

static CANDY: Theme = Theme {
    body: &[Rgb::hex(0xf7aef8), Rgb::hex(0xffafcc), Rgb::hex(0xfdbad3)],
    belly: &[Rgb::hex(0xffe6f7), Rgb::hex(0xfff2fb)],
    accent: &[Rgb::hex(0xffcad4), Rgb::hex(0xffe5ec)],
    eye: Some(&[Rgb::hex(0x2b2d42), Rgb::hex(0x3a3058)]),
    outline: Some(Rgb::hex(0x332d4f)),
};

static FOREST: Theme = Theme {
    body: &[Rgb::hex(0xa0d995), Rgb::hex(0x8bcf8a), Rgb::hex(0x74c69d)],
    belly: &[Rgb::hex(0xe3f6d9), Rgb::hex(0xd7f2cb)],
    accent: &[Rgb::hex(0x90b44b), Rgb::hex(0xcdf2a6)],
    eye: Some(&[Rgb::hex(0x1e2a23)]),
    outline: Some(Rgb::hex(0x2b2f2a)),
};

static AQUA: Theme = Theme {
    body: &[Rgb::hex(0x69d2e7), Rgb::hex(0x6ec4ff), Rgb::hex(0x5fb0f5)],
    belly: &[Rgb::hex(0xd0f4ff), Rgb::hex(0xe6fbff)],
    accent: &[Rgb::hex(0x4ac1c9), Rgb::hex(0x7dddf2)],
    eye: Some(&[Rgb::hex(0x0f2540), Rgb::hex(0x182848)]),
    outline: Some(Rgb::hex(0x1f2d42)),
};

static SUNNY: Theme = Theme {
    body: &[Rgb::hex(0xffb347), Rgb::hex(0xf9a620), Rgb::hex(0xff9f1c)],
    belly: &[Rgb::hex(0xffe5b4), Rgb::hex(0xfff0d0)],
    accent: &[Rgb::hex(0xffd166), Rgb::hex(0xffbe0b)],
    eye: Some(&[Rgb::hex(0x3d1f0f)]),
    outline: Some(Rgb::hex(0x2f1f16)),
};

static BERRY: Theme = Theme {
    body: &[Rgb::hex(0x8f72e0), Rgb::hex(0x7c5ce0), Rgb::hex(0x6f53c6)],
    belly: &[Rgb::hex(0xdfd4ff), Rgb::hex(0xe9ddff)],
    accent: &[Rgb::hex(0xffcad4), Rgb::hex(0xf6bd60)],
    eye: Some(&[Rgb::hex(0x120d1f), Rgb::hex(0x1c1333)]),
    outline: Some(Rgb::hex(0x20143a)),
};

static MIDNIGHT: Theme = Theme {
    body: &[Rgb::hex(0x4d5483), Rgb::hex(0x45506e), Rgb::hex(0x515e91)],
    belly: &[Rgb::hex(0xd6dcff), Rgb::hex(0xc2c9ff)],
    accent: &[Rgb::hex(0x8fb8ff), Rgb::hex(0x79a6ff)],
    eye: Some(&[Rgb::hex(0xf8f9fa), Rgb::hex(0xdfe2ff)]),
    outline: Some(Rgb::hex(0x1b1f36)),
};

static EARTH: Theme = Theme {
    body: &[Rgb::hex(0xe2c290), Rgb::hex(0xd4a373), Rgb::hex(0xbf8b5e)],
    belly: &[Rgb::hex(0xf6e7c1), Rgb::hex(0xf2dcb3)],
    accent: &[Rgb::hex(0xcbb682), Rgb::hex(0xab8d5d)],
    eye: Some(&[Rgb::hex(0x2e1f18)]),
    outline: Some(Rgb::hex(0x2d1b10)),
};
