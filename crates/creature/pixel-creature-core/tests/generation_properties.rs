use std::collections::HashSet;

use pixel_creature_core::{
    outline::border_cells, Creature, FixedEntropy, Generator, Layer, Overrides, PresetId, ThemeId,
    GRID_SIZE,
};

const NAMES: [&str; 6] = ["Mochi", "Pip", "Nyx", "Bruno", "", "Zoë"];

fn every_combination() -> impl Iterator<Item = (PresetId, ThemeId)> {
    PresetId::ALL
        .into_iter()
        .flat_map(|p| ThemeId::ALL.into_iter().map(move |t| (p, t)))
}

fn all_pixels(creature: &Creature) -> impl Iterator<Item = (u8, u8)> + '_ {
    creature
        .layers
        .iter()
        .flatten()
        .chain(creature.wings.iter().flat_map(|w| w.pixels.iter()))
        .map(|p| (p.x, p.y))
}

#[test]
fn same_inputs_same_markup() {
    let generator = Generator::default();
    for name in NAMES {
        for seed in [0, 1, 0xdead_beef, u32::MAX] {
            let a = generator.generate(name, &mut FixedEntropy(seed));
            let b = generator.generate(name, &mut FixedEntropy(seed));
            assert_eq!(a, b, "{name:?} / {seed}");
        }
    }
}

#[test]
fn variation_seed_changes_the_creature() {
    let generator = Generator::default();
    let outputs: HashSet<String> = (0..16)
        .map(|seed| generator.generate_with_seed("Mochi", seed * 7919))
        .collect();
    assert!(outputs.len() > 1);
}

#[test]
fn changing_the_name_changes_the_creature() {
    let names = [
        "Mochi", "Pip", "Nyx", "Bruno", "Zoë", "Biscuit", "Pickle", "Waffles", "Ziggy", "Luna",
    ];
    let generator = Generator::default();
    let creatures: Vec<Creature> = names.iter().map(|name| generator.sketch(name, 0)).collect();
    for (i, a) in creatures.iter().enumerate() {
        for b in &creatures[i + 1..] {
            assert_ne!(a.seed, b.seed, "{} and {} share a seed", a.name, b.name);
            assert_ne!(a.layers, b.layers, "{} and {} drew the same sprite", a.name, b.name);
        }
    }

    // The label differs anyway, so compare markup with it stripped.
    let bodies: HashSet<String> = names
        .iter()
        .map(|name| {
            let svg = generator.generate_with_seed(name, 0);
            svg.split_once('\n').map(|(_, rest)| rest.to_string()).unwrap_or_default()
        })
        .collect();
    assert_eq!(bodies.len(), names.len());
}

#[test]
fn every_pixel_stays_on_the_grid() {
    let generator = Generator::default();
    for (preset, theme) in every_combination() {
        let overrides = Overrides {
            preset: Some(preset),
            theme: Some(theme),
        };
        for seed in 0..12u32 {
            let creature = generator.sketch_with("Mochi", seed.wrapping_mul(0x9e37_79b9), &overrides);
            for (x, y) in all_pixels(&creature) {
                assert!(i32::from(x) < GRID_SIZE && i32::from(y) < GRID_SIZE);
            }
        }
    }
}

#[test]
fn outline_covers_each_border_cell_exactly_once() {
    let generator = Generator::default();
    for (preset, theme) in every_combination() {
        let overrides = Overrides {
            preset: Some(preset),
            theme: Some(theme),
        };
        let creature = generator.sketch_with("Pip", 31, &overrides);
        let outline: Vec<(i32, i32)> = creature
            .layer(Layer::Outline)
            .iter()
            .map(|p| (i32::from(p.x), i32::from(p.y)))
            .collect();
        let unique: HashSet<_> = outline.iter().copied().collect();
        assert_eq!(unique.len(), outline.len(), "{preset:?} painted a border cell twice");

        let expected: HashSet<_> = border_cells(&creature.outline_mask).iter().collect();
        assert_eq!(unique, expected, "{preset:?}");
        for (x, y) in &outline {
            assert!(!creature.outline_mask.contains(*x, *y));
        }
        assert!(creature
            .layer(Layer::Outline)
            .iter()
            .all(|p| p.color == creature.palette.outline));
    }
}

#[test]
fn silhouette_comes_only_from_structural_layers() {
    let generator = Generator::default();
    for (preset, theme) in every_combination() {
        let overrides = Overrides {
            preset: Some(preset),
            theme: Some(theme),
        };
        let creature = generator.sketch_with("Nyx", 5, &overrides);
        let solid_layers: HashSet<(i32, i32)> = creature
            .layer(Layer::Body)
            .iter()
            .chain(creature.wings.iter().flat_map(|w| w.pixels.iter()))
            .map(|p| (i32::from(p.x), i32::from(p.y)))
            .collect();
        for (x, y) in creature.outline_mask.iter() {
            let decorated = creature
                .layer(Layer::Decoration)
                .iter()
                .any(|p| (i32::from(p.x), i32::from(p.y)) == (x, y));
            assert!(solid_layers.contains(&(x, y)) || decorated, "{preset:?} ({x}, {y})");
        }
    }
}

#[test]
fn eyes_come_in_symmetric_pairs() {
    let generator = Generator::default();
    for name in NAMES {
        for seed in 0..40u32 {
            let creature = generator.sketch(name, seed.wrapping_mul(2_654_435_761));
            let [left, right] = creature.eyes;
            assert_eq!(left.y, right.y);
            assert_eq!((left.width, left.height), (right.width, right.height));
            let preset = creature.preset.preset();
            assert!(preset.eye_width.contains(left.width), "{name:?}/{seed}: width {}", left.width);
            assert!(preset.eye_height.contains(left.height), "{name:?}/{seed}: height {}", left.height);
            let mid = f64::from(GRID_SIZE) / 2.0;
            let skew = (left.center_x() + right.center_x()) / 2.0 - mid;
            assert!(skew.abs() <= 1.0, "{name:?}/{seed}: skew {skew}");
            assert_eq!(creature.blinks.len(), 2);
        }
    }
}

#[test]
fn every_preset_appears_eventually() {
    let generator = Generator::default();
    let seen: HashSet<PresetId> = (0..400u32)
        .map(|seed| generator.sketch("Mochi", seed.wrapping_mul(0x85eb_ca6b)).preset)
        .collect();
    assert_eq!(seen.len(), PresetId::ALL.len());
}

#[test]
fn default_theme_choice_stays_within_the_preset() {
    let generator = Generator::default();
    for seed in 0..200u32 {
        let creature = generator.sketch("Pip", seed.wrapping_mul(0x27d4_eb2d));
        assert!(creature.preset.preset().themes.contains(&creature.theme));
    }
}

#[test]
fn empty_name_still_renders() {
    let generator = Generator::default();
    let svg = generator.generate_with_seed("", 0);
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"aria-label="Pixel creature ""#));
    assert_eq!(generator.sketch("", 0).seed, pixel_creature_core::seed::FALLBACK_SEED);
}

#[test]
fn label_is_escaped() {
    let svg = Generator::default().generate_with_seed(r#"<Tom & "Jerry">"#, 3);
    assert!(svg.contains("aria-label=\"Pixel creature &lt;Tom &amp; &quot;Jerry&quot;&gt;\""));
}

#[test]
fn markup_is_balanced() {
    let generator = Generator::default();
    for seed in 0..30u32 {
        let svg = generator.generate_with_seed("Bruno", seed);
        let opens = svg.matches("<g>").count() + svg.matches("<g data-layer=").count();
        assert_eq!(opens, svg.matches("</g>").count(), "seed {seed}");
        assert_eq!(svg.matches("<svg ").count(), 1);
    }
}
