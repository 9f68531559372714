//! Pixel Creature Core
//!
//! Deterministic procedural pixel-art creatures rendered as animated SVG.
//! A name and a variation seed select one of eight archetypes and a color
//! theme, rasterize a 32x32 sprite across six layers, outline it, and attach
//! wing, blink and bounce animations. Adapters (wasm) sit on top of
//! [`Generator`].

pub mod animation;
pub mod body;
pub mod canvas;
pub mod color;
pub mod config;
pub mod decor;
pub mod entropy;
pub mod error;
pub mod face;
pub mod form;
pub mod generator;
pub mod outline;
pub mod palette;
pub mod preset;
pub mod record;
pub mod rng;
pub mod seed;
pub mod svg;
pub mod theme;

// Re-exports for consumers (adapters)
pub use animation::{Blink, Bounce, Flap, Side, WingGroup};
pub use canvas::{CellMask, Layer, Pixel, CANVAS_SIZE, GRID_SIZE, PIXEL_SIZE};
pub use color::Rgb;
pub use config::{AnimationToggles, GeneratorConfig};
pub use entropy::{EntropySource, FixedEntropy};
#[cfg(feature = "system-entropy")]
pub use entropy::SystemEntropy;
pub use error::{ColorError, ConfigError, DraftError, GenerateError};
pub use face::EyeBox;
pub use form::CreatureForm;
#[cfg(feature = "system-entropy")]
pub use generator::generate;
pub use generator::{Creature, Generator, Overrides};
pub use palette::Palette;
pub use preset::{Preset, PresetId};
pub use record::{CreatureDraft, CreatureRecord, CreatureState, DEFAULT_LEVEL, DEFAULT_OWNER_ID};
pub use rng::XorShift32;
pub use seed::{combine_seed, name_to_seed};
pub use theme::{Theme, ThemeId};

/// Bumped whenever the markup layout or the random draw order changes.
pub const FORMAT_VERSION: u32 = 1;
