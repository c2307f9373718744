//! The prompt draft: every user-editable field driving composition, plus the
//! fixed tone presets and option vocabularies the form offers.
//!
//! The draft is transient, page-lifetime state. It starts out filled with the
//! example concept below so the first generated prompt is immediately
//! meaningful, and "Clear Inputs" resets every field to empty/unselected
//! rather than back to these defaults.

/// A named bundle of mood and atmosphere language applied as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonePreset {
    pub label: &'static str,
    pub mood: &'static str,
    pub color_language: &'static str,
}

/// The selectable tonal presets, in display order.
pub const TONE_PRESETS: [TonePreset; 3] = [
    TonePreset {
        label: "Wholesome Cozy",
        mood: "a soothing, heartwarming atmosphere filled with slow-burn intimacy",
        color_language: "soft pastel palettes, warm candlelight, gentle acoustic themes",
    },
    TonePreset {
        label: "Star-crossed Drama",
        mood: "high stakes romance with emotional crescendos and poetic angst",
        color_language: "neon dusk skylines, rain swept streets, swelling orchestral cues",
    },
    TonePreset {
        label: "Magical Realism",
        mood: "romance woven with wonder, surreal discoveries, and lyrical symbolism",
        color_language: "glowing constellations, enchanted flora, ethereal chimes and whispers",
    },
];

/// Gameplay pillars offered as independent toggles.
pub const MECHANIC_OPTIONS: [&str; 8] = [
    "branching dialogue",
    "relationship stat tracking",
    "calendar-based scheduling",
    "mini-games for emotional resonance",
    "cozy crafting to unlock memories",
    "cinematic quick-time expressions",
    "moral alignment choices",
    "dual perspective storytelling",
];

pub const PACING_OPTIONS: [&str; 5] = [
    "Episodic chapters with cliffhangers",
    "Open-world slice-of-life loop",
    "Visual novel routes branching early",
    "Time loop with evolving choices",
    "Seasonal progression across a year",
];

pub const PLATFORM_OPTIONS: [&str; 5] = [
    "PC & Console narrative adventure",
    "Mobile interactive fiction",
    "VR immersive romance experience",
    "Web-based playable teaser",
    "Hybrid visual novel & dating sim",
];

pub const RATING_OPTIONS: [&str; 3] = [
    "PG gentle affection",
    "PG-13 modern romance",
    "Mature emotional intimacy",
];

/// The in-memory collection of user-entered and selected field values.
///
/// Free-text fields accept arbitrary strings; empty is always valid. For the
/// single-select fields an empty string means "unselected". Mechanics keep
/// their selection order, which is also their rendering order in the output.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptDraft {
    pub working_title: String,
    pub setting: String,
    pub protagonists: String,
    pub conflict: String,
    pub twist: String,
    pub tonal_preset: Option<TonePreset>,
    pub mechanics: Vec<String>,
    pub pacing: String,
    pub platform: String,
    pub rating: String,
    pub player_experience: String,
    pub must_include: String,
}

impl Default for PromptDraft {
    fn default() -> Self {
        Self {
            working_title: "Moonlit Echoes".to_string(),
            setting: "a floating archipelago of bioluminescent isles inspired by Southeast Asian folklore".to_string(),
            protagonists: "A rebellious star-mapper and a grounded botanical artisan whose families control rival sky-gardens".to_string(),
            conflict: "Centuries-old ecological feud threatens the archipelago just as a rare lunar alignment awakens an ancient vow binding their bloodlines".to_string(),
            twist: "Every choice etches sigils into the sky, rewriting constellations that alter the emotional memories of both leads".to_string(),
            tonal_preset: Some(TONE_PRESETS[2]),
            mechanics: vec![
                "branching dialogue".to_string(),
                "cozy crafting to unlock memories".to_string(),
                "dual perspective storytelling".to_string(),
            ],
            pacing: "Seasonal progression across a year".to_string(),
            platform: "PC & Console narrative adventure".to_string(),
            rating: "PG-13 modern romance".to_string(),
            player_experience: "Players feel enchanted, emotionally invested, and empowered to choreograph meaningful gestures of love while safeguarding the ecosystem.".to_string(),
            must_include: "translate player choices into evolving constellations, highlight cultural rituals, celebrate slow trust-building scenes".to_string(),
        }
    }
}

impl PromptDraft {
    /// A draft with every field empty/unselected. This is the "Clear Inputs"
    /// target, distinct from the startup defaults.
    pub fn empty() -> Self {
        Self {
            working_title: String::new(),
            setting: String::new(),
            protagonists: String::new(),
            conflict: String::new(),
            twist: String::new(),
            tonal_preset: None,
            mechanics: Vec::new(),
            pacing: String::new(),
            platform: String::new(),
            rating: String::new(),
            player_experience: String::new(),
            must_include: String::new(),
        }
    }

    /// Reset every field to empty/unselected.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    pub fn has_mechanic(&self, mechanic: &str) -> bool {
        self.mechanics.iter().any(|m| m == mechanic)
    }

    /// Toggle a mechanic on or off. New selections append, so the vector
    /// preserves selection order for rendering.
    pub fn toggle_mechanic(&mut self, mechanic: &str) {
        if let Some(pos) = self.mechanics.iter().position(|m| m == mechanic) {
            self.mechanics.remove(pos);
        } else {
            self.mechanics.push(mechanic.to_string());
        }
    }

    pub fn select_tone(&mut self, preset: TonePreset) {
        self.tonal_preset = Some(preset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_is_fully_populated() {
        let draft = PromptDraft::default();
        assert_eq!(draft.working_title, "Moonlit Echoes");
        assert_eq!(
            draft.tonal_preset.map(|p| p.label),
            Some("Magical Realism")
        );
        assert_eq!(draft.mechanics.len(), 3);
        assert_eq!(draft.pacing, "Seasonal progression across a year");
        assert_eq!(draft.platform, "PC & Console narrative adventure");
        assert_eq!(draft.rating, "PG-13 modern romance");
        assert!(!draft.must_include.is_empty());
    }

    #[test]
    fn test_clear_resets_to_empty_not_defaults() {
        let mut draft = PromptDraft::default();
        draft.clear();
        assert_eq!(draft, PromptDraft::empty());
        assert!(draft.working_title.is_empty());
        assert!(draft.tonal_preset.is_none());
        assert!(draft.mechanics.is_empty());
        assert!(draft.pacing.is_empty());
    }

    #[test]
    fn test_toggle_mechanic_preserves_selection_order() {
        let mut draft = PromptDraft::empty();
        draft.toggle_mechanic("branching dialogue");
        draft.toggle_mechanic("moral alignment choices");
        draft.toggle_mechanic("branching dialogue"); // deselect
        draft.toggle_mechanic("branching dialogue"); // reselect, now last
        assert_eq!(
            draft.mechanics,
            vec![
                "moral alignment choices".to_string(),
                "branching dialogue".to_string()
            ]
        );
    }

    #[test]
    fn test_select_tone_replaces_previous_choice() {
        let mut draft = PromptDraft::empty();
        draft.select_tone(TONE_PRESETS[0]);
        draft.select_tone(TONE_PRESETS[1]);
        assert_eq!(draft.tonal_preset, Some(TONE_PRESETS[1]));
    }
}
