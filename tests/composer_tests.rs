use pretty_assertions::assert_eq;
use promptforge::app::composer::{compose_prompt, MECHANICS_FALLBACK, TONE_FALLBACK};
use promptforge::app::draft::{PromptDraft, TONE_PRESETS};

#[test]
fn test_composing_twice_yields_identical_strings() {
    let draft = PromptDraft::default();
    assert_eq!(compose_prompt(&draft), compose_prompt(&draft));

    // Two independently built but equal drafts also agree
    let rebuilt = PromptDraft::default();
    assert_eq!(compose_prompt(&draft), compose_prompt(&rebuilt));
}

#[test]
fn test_starlit_letters_example() {
    let mut draft = PromptDraft::empty();
    draft.working_title = "Starlit Letters".to_string();

    let prompt = compose_prompt(&draft);
    let segments: Vec<&str> = prompt.split("\n\n").collect();

    // The preamble leads; the first content line is the working title
    assert_eq!(segments[1], "Working title: Starlit Letters.");
    assert_eq!(
        segments[7],
        format!("Tone & atmosphere: {}.", TONE_FALLBACK)
    );
    assert!(!prompt.contains("Non-negotiables"));
}

#[test]
fn test_empty_must_include_emits_no_segment() {
    let draft = PromptDraft::empty();
    let prompt = compose_prompt(&draft);
    assert_eq!(prompt.matches("Non-negotiables").count(), 0);
}

#[test]
fn test_non_empty_must_include_emits_exactly_one_segment() {
    let mut draft = PromptDraft::empty();
    draft.must_include = "celebrate slow trust-building scenes".to_string();

    let prompt = compose_prompt(&draft);
    assert_eq!(prompt.matches("Non-negotiables").count(), 1);
    assert!(prompt.contains("Non-negotiables: celebrate slow trust-building scenes."));
}

#[test]
fn test_dropped_must_include_shrinks_segment_count() {
    let mut draft = PromptDraft::empty();
    assert_eq!(compose_prompt(&draft).split("\n\n").count(), 14);

    draft.must_include = "highlight cultural rituals".to_string();
    assert_eq!(compose_prompt(&draft).split("\n\n").count(), 15);
}

#[test]
fn test_empty_mechanics_uses_fallback_sentence() {
    let draft = PromptDraft::empty();
    let prompt = compose_prompt(&draft);
    assert!(prompt.contains(MECHANICS_FALLBACK));
    assert!(!prompt.contains("Key interactive pillars"));
}

#[test]
fn test_mechanics_render_one_bullet_per_item_in_insertion_order() {
    let mut draft = PromptDraft::empty();
    draft.toggle_mechanic("moral alignment choices");
    draft.toggle_mechanic("branching dialogue");
    draft.toggle_mechanic("mini-games for emotional resonance");

    let prompt = compose_prompt(&draft);
    assert!(prompt.contains(
        "Key interactive pillars: • moral alignment choices\n\
         • branching dialogue\n\
         • mini-games for emotional resonance."
    ));
    assert!(!prompt.contains(MECHANICS_FALLBACK));
}

#[test]
fn test_deselection_moves_reselected_mechanic_to_the_end() {
    let mut draft = PromptDraft::empty();
    draft.toggle_mechanic("branching dialogue");
    draft.toggle_mechanic("moral alignment choices");
    draft.toggle_mechanic("branching dialogue");
    draft.toggle_mechanic("branching dialogue");

    let prompt = compose_prompt(&draft);
    assert!(prompt
        .contains("Key interactive pillars: • moral alignment choices\n• branching dialogue."));
}

#[test]
fn test_unset_tone_uses_fallback_sentence() {
    let prompt = compose_prompt(&PromptDraft::empty());
    assert!(prompt.contains(&format!("Tone & atmosphere: {}.", TONE_FALLBACK)));
}

#[test]
fn test_selected_tone_renders_mood_and_color_language_verbatim() {
    for preset in TONE_PRESETS {
        let mut draft = PromptDraft::empty();
        draft.select_tone(preset);

        let prompt = compose_prompt(&draft);
        assert!(prompt.contains(preset.mood));
        assert!(prompt.contains(preset.color_language));
        assert!(!prompt.contains(TONE_FALLBACK));
    }
}

#[test]
fn test_blank_required_fields_still_emit_labeled_segments() {
    let prompt = compose_prompt(&PromptDraft::empty());
    for label in [
        "Working title: .",
        "Primary setting: .",
        "Lead characters: .",
        "Central conflict: .",
        "Signature twist: .",
        "Platform goals: .",
        "Narrative pacing: .",
        "Content rating & boundaries: .",
    ] {
        assert!(prompt.contains(label), "missing segment: {}", label);
    }
}

#[test]
fn test_segments_are_separated_by_exactly_one_blank_line() {
    let prompt = compose_prompt(&PromptDraft::default());
    assert!(!prompt.contains("\n\n\n"));
}

#[test]
fn test_fixed_trailing_segments_close_the_prompt() {
    let prompt = compose_prompt(&PromptDraft::empty());
    let segments: Vec<&str> = prompt.split("\n\n").collect();

    let deliverables = segments[segments.len() - 2];
    assert!(deliverables.starts_with("Deliverables:"));
    assert_eq!(deliverables.lines().count(), 6);

    assert!(segments[segments.len() - 1].starts_with("Voice & format:"));
}

#[test]
fn test_default_draft_composes_the_example_concept() {
    let prompt = compose_prompt(&PromptDraft::default());
    assert!(prompt.contains("Working title: Moonlit Echoes."));
    assert!(prompt.contains("Narrative pacing: Seasonal progression across a year."));
    assert!(prompt.contains("Non-negotiables: translate player choices into evolving constellations"));
}
