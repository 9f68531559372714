use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use pixel_creature_core::{
    CreatureDraft, EntropySource, GenerateError, Generator, GeneratorConfig,
};

/// Browser randomness: `crypto.getRandomValues`, else `Math.random()`.
#[derive(Copy, Clone, Debug, Default)]
pub struct WebEntropy;

impl EntropySource for WebEntropy {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        match getrandom::getrandom(&mut bytes) {
            Ok(()) => u32::from_le_bytes(bytes),
            Err(err) => {
                log::debug!("crypto randomness unavailable ({err}); using Math.random");
                (js_sys::Math::random() * f64::from(u32::MAX)).floor() as u32
            }
        }
    }
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
pub struct PixelCreatures {
    core: Generator,
}

#[wasm_bindgen]
impl PixelCreatures {
    /// Create a generator. Pass a config object or undefined/null for defaults.
    /// Example:
    ///   new PixelCreatures({ labelPrefix: "Monstre pixel", animations: { bounce: false } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PixelCreatures, JsError> {
        console_error_panic_hook::set_once();

        let cfg: GeneratorConfig = if jsvalue_is_undefined_or_null(&config) {
            GeneratorConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(PixelCreatures {
            core: Generator::new(cfg),
        })
    }

    /// SVG markup for a trimmed, non-empty name with a fresh variation seed.
    #[wasm_bindgen(js_name = generate)]
    pub fn generate(&self, name: String) -> Result<String, JsError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(JsError::new(&GenerateError::EmptyName.to_string()));
        }
        Ok(self.core.generate(name, &mut WebEntropy))
    }

    /// Deterministic markup for a fixed variation seed.
    #[wasm_bindgen(js_name = generate_with_seed)]
    pub fn generate_with_seed(&self, name: String, variation_seed: u32) -> String {
        self.core.generate_with_seed(&name, variation_seed)
    }

    /// The structured creature (layers, palette, eye boxes, animation timing).
    #[wasm_bindgen(js_name = describe)]
    pub fn describe(&self, name: String, variation_seed: u32) -> Result<JsValue, JsError> {
        let creature = self.core.sketch(&name, variation_seed);
        swb::to_value(&creature).map_err(|e| JsError::new(&format!("describe error: {e}")))
    }
}

/// Validate a creature draft object as the create form submits it.
#[wasm_bindgen(js_name = validate_draft)]
pub fn validate_draft(draft: JsValue) -> Result<(), JsError> {
    if jsvalue_is_undefined_or_null(&draft) {
        return Err(JsError::new("validate_draft: draft is null/undefined"));
    }
    let draft: CreatureDraft =
        swb::from_value(draft).map_err(|e| JsError::new(&format!("draft parse error: {e}")))?;
    draft
        .validate()
        .map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen]
pub fn abi_version() -> u32 {
    pixel_creature_core::FORMAT_VERSION
}
