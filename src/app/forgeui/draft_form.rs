//! The single-page creative-brief form.
//!
//! Every widget binds directly to a field of the [`PromptDraft`]; the form
//! itself keeps no state of its own. Tonal presets and gameplay pillars render
//! as chip rows, the remaining enumerated fields as combo boxes with an
//! explicit "unselected" entry mirroring their empty-string state.

use crate::app::draft::{
    PromptDraft, MECHANIC_OPTIONS, PACING_OPTIONS, PLATFORM_OPTIONS, RATING_OPTIONS, TONE_PRESETS,
};
use eframe::egui;
use egui::RichText;

/// What the user asked the form to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Generate,
    Clear,
}

/// Render the form against the draft and report the requested action.
pub fn show(ui: &mut egui::Ui, draft: &mut PromptDraft) -> FormAction {
    let mut action = FormAction::None;

    field_label(ui, "Working title & hook", None);
    ui.add(
        egui::TextEdit::singleline(&mut draft.working_title)
            .hint_text("e.g. Starlit Letters")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(12.0);

    field_label(ui, "Signature setting or worldbuilding", None);
    text_area(ui, &mut draft.setting, "Describe the romantic backdrop players explore…");

    field_label(ui, "Lead characters & chemistry", None);
    text_area(
        ui,
        &mut draft.protagonists,
        "Outline the protagonists, their motivations, and how sparks fly…",
    );

    field_label(ui, "Core conflict or obstacle", None);
    text_area(
        ui,
        &mut draft.conflict,
        "What threatens their bond or the world around them?",
    );

    field_label(ui, "Signature twist", None);
    text_area(
        ui,
        &mut draft.twist,
        "Include the magical, sci-fi, or dramatic hook that makes this romance unforgettable…",
    );

    field_label(ui, "Tonal presets", Some("Tap to infuse language & mood"));
    ui.horizontal_wrapped(|ui| {
        for preset in TONE_PRESETS {
            let is_active = draft.tonal_preset.map(|p| p.label) == Some(preset.label);
            if ui.selectable_label(is_active, preset.label).clicked() {
                draft.select_tone(preset);
            }
        }
    });
    ui.add_space(12.0);

    field_label(ui, "Gameplay pillars", Some("Select mechanics that matter"));
    ui.horizontal_wrapped(|ui| {
        for option in MECHANIC_OPTIONS {
            let is_active = draft.has_mechanic(option);
            if ui.selectable_label(is_active, option).clicked() {
                draft.toggle_mechanic(option);
            }
        }
    });
    ui.add_space(12.0);

    field_label(ui, "Desired player feelings & outcomes", None);
    text_area(
        ui,
        &mut draft.player_experience,
        "Describe how players should feel after each session…",
    );

    field_label(ui, "Must include elements", None);
    text_area(
        ui,
        &mut draft.must_include,
        "Cultural notes, accessibility, UX details, story beats…",
    );

    field_label(ui, "Target platform", None);
    option_select(
        ui,
        "target_platform",
        &mut draft.platform,
        "Select a primary platform",
        &PLATFORM_OPTIONS,
    );
    ui.add_space(12.0);

    field_label(ui, "Narrative pacing structure", None);
    option_select(
        ui,
        "narrative_pacing",
        &mut draft.pacing,
        "Choose a pacing model",
        &PACING_OPTIONS,
    );
    ui.add_space(12.0);

    field_label(ui, "Content boundaries", None);
    option_select(
        ui,
        "content_rating",
        &mut draft.rating,
        "Define a content tone",
        &RATING_OPTIONS,
    );
    ui.add_space(18.0);

    ui.horizontal(|ui| {
        if ui
            .button(RichText::new("Generate AI Prompt").strong())
            .clicked()
        {
            action = FormAction::Generate;
        }
        if ui.button("Clear Inputs").clicked() {
            action = FormAction::Clear;
        }
    });

    action
}

fn field_label(ui: &mut egui::Ui, label: &str, hint: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).strong());
        if let Some(hint) = hint {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(hint);
            });
        }
    });
}

fn text_area(ui: &mut egui::Ui, value: &mut String, placeholder: &str) {
    ui.add(
        egui::TextEdit::multiline(value)
            .hint_text(placeholder)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(12.0);
}

/// Combo box over a fixed vocabulary where the empty string means
/// "unselected", shown as the placeholder entry.
fn option_select(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut String,
    placeholder: &str,
    options: &[&str],
) {
    let selected_text = if value.is_empty() {
        placeholder.to_string()
    } else {
        value.clone()
    };

    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .width(320.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(value, String::new(), placeholder);
            for option in options {
                ui.selectable_value(value, option.to_string(), *option);
            }
        });
}
