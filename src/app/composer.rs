//! Deterministic prompt composition.
//!
//! [`compose_prompt`] maps a [`PromptDraft`] to the final text block through
//! fixed string templates: resolve the tone and mechanics sections (each with
//! a fallback when nothing is selected), drop the optional non-negotiables
//! segment when empty, then join the ordered segments with blank lines. The
//! function is pure - identical drafts always produce byte-identical output.

use crate::app::draft::PromptDraft;

/// Tone sentence used when no tonal preset is selected.
pub const TONE_FALLBACK: &str = "a heartfelt romantic tone rooted in authentic emotions";

/// Mechanics segment used when no gameplay pillars are selected.
pub const MECHANICS_FALLBACK: &str =
    "Suggest appropriate interactive mechanics that reinforce emotional choices.";

const PREAMBLE: &str =
    "You are an award-winning narrative game designer helping craft a romantic game concept.";

const DELIVERABLES: &str = "Deliverables:\n\
• High-level story synopsis with acts and emotional beats\n\
• Character arcs with relationship milestones\n\
• Gameplay loop that reinforces intimacy and player agency\n\
• Sensory palate (visual, audio, UX) that embodies the romance\n\
• Optional stretch goals or narrative DLC hooks";

const VOICE_AND_FORMAT: &str = "Voice & format: use immersive, transportive language; \
keep paragraphs concise; highlight how mechanics and story intertwine; \
end with three quick pitching taglines.";

/// Compose the production-ready prompt from the current draft.
///
/// Blank free-text fields still emit their labeled segment (the label line is
/// considered part of the brief's skeleton); only the non-negotiables segment
/// disappears entirely when `must_include` is empty.
pub fn compose_prompt(draft: &PromptDraft) -> String {
    let tone_mood = match &draft.tonal_preset {
        Some(preset) => format!(
            "{} with descriptive cues like {}",
            preset.mood, preset.color_language
        ),
        None => TONE_FALLBACK.to_string(),
    };

    let mechanics_section = if draft.mechanics.is_empty() {
        MECHANICS_FALLBACK.to_string()
    } else {
        let bullets = draft
            .mechanics
            .iter()
            .map(|item| format!("• {}", item))
            .collect::<Vec<_>>()
            .join("\n");
        format!("Key interactive pillars: {}.", bullets)
    };

    let must_include_section = if draft.must_include.is_empty() {
        String::new()
    } else {
        format!("Non-negotiables: {}.", draft.must_include)
    };

    let segments = [
        PREAMBLE.to_string(),
        format!("Working title: {}.", draft.working_title),
        format!("Primary setting: {}.", draft.setting),
        format!("Lead characters: {}.", draft.protagonists),
        format!("Central conflict: {}.", draft.conflict),
        format!("Signature twist: {}.", draft.twist),
        // No trailing period - the field usually ends with its own sentence
        format!("Target experience: {}", draft.player_experience),
        format!("Tone & atmosphere: {}.", tone_mood),
        format!("Platform goals: {}.", draft.platform),
        format!("Narrative pacing: {}.", draft.pacing),
        format!("Content rating & boundaries: {}.", draft.rating),
        mechanics_section,
        must_include_section,
        DELIVERABLES.to_string(),
        VOICE_AND_FORMAT.to_string(),
    ];

    segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n\n")
}
