#[cfg(test)]
mod tests {
    use promptforge::app::draft::PromptDraft;
    use promptforge::app::forgeui::app::{ForgeApp, ThemeChoice};

    #[test]
    fn test_forgeapp_default() {
        let app = ForgeApp::default();

        // Check default theme (using match since ThemeChoice doesn't have Debug)
        assert!(matches!(app.theme, ThemeChoice::Latte));

        // The draft starts from the built-in example concept
        assert_eq!(app.draft, PromptDraft::default());
        assert_eq!(app.draft.working_title, "Moonlit Echoes");

        // Nothing composed or copied yet
        assert!(!app.output.has_prompt());
        assert!(!app.output.copy_confirmation_active());

        // Floating windows start closed
        assert!(!app.help_window.open);
        assert!(!app.log_window.open);
    }

    #[test]
    fn test_theme_choice_default() {
        let theme = ThemeChoice::default();
        assert!(matches!(theme, ThemeChoice::Latte));
    }

    #[test]
    fn test_theme_choice_display() {
        assert_eq!(ThemeChoice::Latte.to_string(), "Latte");
        assert_eq!(ThemeChoice::Frappe.to_string(), "Frappe");
        assert_eq!(ThemeChoice::Macchiato.to_string(), "Macchiato");
        assert_eq!(ThemeChoice::Mocha.to_string(), "Mocha");
    }

    #[test]
    fn test_generate_fills_the_output_panel() {
        let mut app = ForgeApp::default();

        app.generate_prompt();
        assert!(app.output.has_prompt());
        assert!(app.output.prompt().contains("Working title: Moonlit Echoes."));

        // Generating is idempotent for an unchanged draft
        let first = app.output.prompt().to_string();
        app.generate_prompt();
        assert_eq!(app.output.prompt(), first);
    }

    #[test]
    fn test_clear_inputs_resets_draft_and_output() {
        let mut app = ForgeApp::default();
        app.generate_prompt();
        assert!(app.output.has_prompt());

        app.clear_inputs();

        // Every field goes to empty/unselected, not back to the defaults
        assert_eq!(app.draft, PromptDraft::empty());
        assert!(app.draft.tonal_preset.is_none());
        assert!(app.draft.mechanics.is_empty());

        // Composed output and confirmation are gone too
        assert!(!app.output.has_prompt());
        assert!(!app.output.copy_confirmation_active());
    }

    #[test]
    fn test_draft_edits_flow_into_generated_prompt() {
        let mut app = ForgeApp::default();
        app.clear_inputs();

        app.draft.working_title = "Starlit Letters".to_string();
        app.draft.toggle_mechanic("branching dialogue");
        app.generate_prompt();

        let prompt = app.output.prompt();
        assert!(prompt.contains("Working title: Starlit Letters."));
        assert!(prompt.contains("Key interactive pillars: • branching dialogue."));
    }

    #[test]
    fn test_theme_serialization_round_trip() {
        let mut app = ForgeApp::default();
        app.theme = ThemeChoice::Mocha;
        app.generate_prompt();
        app.help_window.open = true;

        let serialized = serde_json::to_string(&app).unwrap();
        let deserialized: ForgeApp = serde_json::from_str(&serialized).unwrap();

        // Theme is preserved
        assert!(matches!(deserialized.theme, ThemeChoice::Mocha));

        // Skipped fields are reset to their defaults
        assert_eq!(deserialized.draft, PromptDraft::default());
        assert!(!deserialized.output.has_prompt());
        assert!(!deserialized.help_window.open);
    }
}
