//! Preset and palette selection.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::preset::{Preset, PRESETS};
use crate::rng::XorShift32;
use crate::theme::ThemeId;

pub const DEFAULT_OUTLINE: Rgb = Rgb::hex(0x22223b);
pub const DEFAULT_EYE: Rgb = Rgb::hex(0x1c1c2b);

/// Concrete colors resolved for one generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub body: Rgb,
    pub belly: Rgb,
    pub accent: Rgb,
    pub eye: Rgb,
    pub outline: Rgb,
    /// Darkened body color used by blink overlays.
    pub lid: Rgb,
}

pub fn pick_preset(rng: &mut XorShift32) -> &'static Preset {
    rng.choose(&PRESETS)
}

pub fn pick_theme(preset: &Preset, rng: &mut XorShift32) -> ThemeId {
    *rng.choose(preset.themes)
}

/// Draws body, belly (only when the preset has one), accent and eye, in that order.
pub fn pick_palette(preset: &Preset, theme_id: ThemeId, rng: &mut XorShift32) -> Palette {
    let theme = theme_id.theme();
    let body = *rng.choose(theme.body);
    let belly = if preset.belly {
        *rng.choose(theme.belly)
    } else {
        body.lighten(0.18)
    };
    let accent = *rng.choose(theme.accent);
    let eye = match theme.eye {
        Some(candidates) => *rng.choose(candidates),
        None => DEFAULT_EYE,
    };
    Palette {
        body,
        belly,
        accent,
        eye,
        outline: theme.outline.unwrap_or(DEFAULT_OUTLINE),
        lid: body.darken(0.15),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::PresetId;

    #[test]
    fn bellyless_presets_derive_a_light_belly() {
        let preset = PresetId::Bat.preset();
        let mut rng = XorShift32::new(99);
        let palette = pick_palette(preset, ThemeId::Midnight, &mut rng);
        assert_eq!(palette.belly, palette.body.lighten(0.18));
        assert_eq!(palette.lid, palette.body.darken(0.15));
        assert_eq!(palette.outline, Rgb::hex(0x1b1f36));
    }

    #[test]
    fn picks_come_from_the_theme() {
        let preset = PresetId::RoundPlush.preset();
        for seed in 1..50 {
            let mut rng = XorShift32::new(seed);
            let theme = pick_theme(preset, &mut rng);
            assert!(preset.themes.contains(&theme));
            let palette = pick_palette(preset, theme, &mut rng);
            let candidates = theme.theme();
            assert!(candidates.body.contains(&palette.body));
            assert!(candidates.belly.contains(&palette.belly));
            assert!(candidates.accent.contains(&palette.accent));
        }
    }
}
