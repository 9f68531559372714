use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    golden: HashMap<String, GoldenEntry>,
    configs: HashMap<String, String>,
}

/// A recorded generation: inputs plus the markup they must reproduce.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldenEntry {
    pub name: String,
    pub variation_seed: u32,
    /// Expected archetype id (kebab-case), when the fixture pins it.
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    pub svg: String,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod golden {
    use super::*;

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.golden.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn entry(name: &str) -> Result<GoldenEntry> {
        lookup(&MANIFEST.golden, "golden", name).cloned()
    }

    /// Expected markup with trailing whitespace (editor newlines) removed.
    pub fn svg(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.golden, "golden", name)?;
        let text = read_to_string(&entry.svg)?;
        Ok(text.trim_end().to_string())
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.golden, "golden", name)?;
        Ok(resolve_path(&entry.svg))
    }
}

pub mod configs {
    use super::*;

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.configs.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.configs, "config", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.configs, "config", name)?;
        super::load_json(rel)
    }
}
