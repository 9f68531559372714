//! Creation-form workflow: name entry, generation, draft submission.

use crate::entropy::EntropySource;
use crate::error::{DraftError, GenerateError};
use crate::generator::Generator;
use crate::record::{CreatureDraft, CreatureState, DEFAULT_LEVEL, DEFAULT_OWNER_ID};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreatureForm {
    pub name: String,
    pub draw: String,
}

impl CreatureForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the raw text; trimming happens on generate.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Generate a drawing for the trimmed name. The form is left untouched
    /// when the name is blank.
    pub fn generate<E>(&mut self, generator: &Generator, entropy: &mut E) -> Result<&str, GenerateError>
    where
        E: EntropySource + ?Sized,
    {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            log::warn!("refusing to generate a creature without a name");
            return Err(GenerateError::EmptyName);
        }
        let trimmed = trimmed.to_string();
        self.draw = generator.generate(&trimmed, entropy);
        self.name = trimmed;
        Ok(&self.draw)
    }

    /// Build a draft with the default level and state. A missing or blank
    /// owner falls back to [`DEFAULT_OWNER_ID`].
    pub fn to_draft(&self, owner_id: Option<&str>) -> CreatureDraft {
        let owner_id = owner_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_OWNER_ID);
        CreatureDraft {
            name: self.name.trim().to_string(),
            draw: self.draw.clone(),
            level: DEFAULT_LEVEL,
            state: CreatureState::default(),
            owner_id: owner_id.to_string(),
        }
    }

    pub fn submit(&self, owner_id: Option<&str>) -> Result<CreatureDraft, DraftError> {
        let draft = self.to_draft(owner_id);
        if let Err(err) = draft.validate() {
            log::warn!("creature draft rejected: {err}");
            return Err(err);
        }
        Ok(draft)
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.draw.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::FixedEntropy;

    #[test]
    fn blank_name_leaves_the_form_alone() {
        let mut form = CreatureForm::new();
        form.set_name("   ");
        let err = form
            .generate(&Generator::default(), &mut FixedEntropy(1))
            .unwrap_err();
        assert_eq!(err, GenerateError::EmptyName);
        assert_eq!(form.name, "   ");
        assert!(form.draw.is_empty());
    }

    #[test]
    fn generate_trims_and_stores_markup() {
        let mut form = CreatureForm::new();
        form.set_name("  Mochi ");
        let draw = form
            .generate(&Generator::default(), &mut FixedEntropy(0))
            .unwrap()
            .to_string();
        assert!(draw.starts_with("<svg"));
        assert_eq!(form.name, "Mochi");
        assert_eq!(form.draw, draw);
    }

    #[test]
    fn submit_requires_a_drawing() {
        let mut form = CreatureForm::new();
        form.set_name("Mochi");
        assert_eq!(form.submit(Some("user-1")), Err(DraftError::MissingDraw));
        form.generate(&Generator::default(), &mut FixedEntropy(5))
            .unwrap();
        let draft = form.submit(None).unwrap();
        assert_eq!(draft.owner_id, DEFAULT_OWNER_ID);
        assert_eq!(draft.level, DEFAULT_LEVEL);
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = CreatureForm {
            name: "Mochi".into(),
            draw: "<svg/>".into(),
        };
        form.reset();
        assert_eq!(form, CreatureForm::default());
    }
}
