use chrono::{TimeZone, Utc};
use pixel_creature_core::{
    CreatureForm, CreatureRecord, CreatureState, DraftError, FixedEntropy, GenerateError,
    Generator, DEFAULT_OWNER_ID,
};

#[test]
fn create_flow_from_name_to_record() {
    let generator = Generator::default();
    let mut form = CreatureForm::new();
    form.set_name("  Mochi  ");
    let draw = form
        .generate(&generator, &mut FixedEntropy(0))
        .unwrap()
        .to_string();
    assert_eq!(draw, generator.generate_with_seed("Mochi", 0));

    let draft = form.submit(None).unwrap();
    assert_eq!(draft.owner_id, DEFAULT_OWNER_ID);

    let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let record = CreatureRecord::from_draft(draft, "creature-1", "user-42", now).unwrap();
    assert_eq!(record.name, "Mochi");
    assert_eq!(record.owner_id, "user-42");
    assert_eq!(record.state, CreatureState::Happy);
    assert_eq!(record.level, 1);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["ownerId"], "user-42");
    assert_eq!(json["createdAt"], "2025-01-02T03:04:05Z");
}

#[test]
fn regenerating_replaces_the_drawing() {
    let generator = Generator::default();
    let mut form = CreatureForm::new();
    form.set_name("Pip");
    let mut seeds = [11u32, 12].into_iter();
    let mut entropy = move || seeds.next().unwrap_or(0);
    let first = form.generate(&generator, &mut entropy).unwrap().to_string();
    let second = form.generate(&generator, &mut entropy).unwrap().to_string();
    assert_ne!(first, second);
    assert_eq!(form.draw, second);
}

#[test]
fn blank_form_never_reaches_the_generator() {
    let generator = Generator::default();
    let mut form = CreatureForm::new();
    let mut calls = 0;
    let mut entropy = || {
        calls += 1;
        7
    };
    assert_eq!(
        form.generate(&generator, &mut entropy),
        Err(GenerateError::EmptyName)
    );
    assert_eq!(calls, 0);
    assert_eq!(form.submit(Some("user")), Err(DraftError::MissingName));
}
