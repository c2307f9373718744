use crate::app::draft::PromptDraft;
use crate::app::forgeui::app::ThemeChoice;
use eframe::egui;
use egui::{Color32, RichText};

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    ThemeChanged,
    GeneratePrompt,
    ClearInputs,
    FocusWindow(&'static str),
    Quit,
}

/// Build the top menu bar and return the action the user picked, if any.
///
/// The right-hand side shows a summary of the current draft so the working
/// title and selection counts stay visible while floating windows cover the
/// form.
pub fn build_menu(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &mut ThemeChoice,
    help_window_open: &mut bool,
    log_window_open: &mut bool,
    draft: &PromptDraft,
    has_prompt: bool,
) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button("Forge", |ui| {
        if ui.button("Generate AI Prompt").clicked() {
            menu_action = MenuAction::GeneratePrompt;
        }
        if ui.button("Clear Inputs").clicked() {
            menu_action = MenuAction::ClearInputs;
        }
        ui.separator();
        if ui.button("Help").clicked() {
            *help_window_open = true;
            menu_action = MenuAction::FocusWindow("help_window");
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button("Windows", |ui| {
        if *help_window_open && ui.button("Help").clicked() {
            menu_action = MenuAction::FocusWindow("help_window");
        }
        if *log_window_open && ui.button("Log Viewer").clicked() {
            menu_action = MenuAction::FocusWindow("log_window");
        }
        if !*help_window_open && !*log_window_open {
            ui.weak("No windows open");
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        if ui.button("Latte").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE);
            *theme = ThemeChoice::Latte;
        }
        if ui.button("Frappe").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE);
            *theme = ThemeChoice::Frappe;
        }
        if ui.button("Macchiato").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO);
            *theme = ThemeChoice::Macchiato;
        }
        if ui.button("Mocha").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA);
            *theme = ThemeChoice::Mocha;
        }
    });

    // Log viewer toggle - positioned after the menus
    if ui.button(RichText::new("📜").size(16.0)).clicked() {
        *log_window_open = !*log_window_open;
        log_debug!("Log button clicked");
    }

    ui.add_space(16.0);

    // Draft summary
    ui.horizontal(|ui| {
        ui.label("Draft:");
        let title = if draft.working_title.is_empty() {
            RichText::new("untitled").italics()
        } else {
            RichText::new(draft.working_title.as_str())
                .color(Color32::from_rgb(180, 140, 220))
                .strong()
        };
        ui.label(title);

        if !draft.mechanics.is_empty() {
            ui.separator();
            ui.label(
                RichText::new(format!("{} mechanics", draft.mechanics.len()))
                    .color(Color32::from_rgb(100, 170, 255)),
            );
        }

        if let Some(preset) = &draft.tonal_preset {
            ui.separator();
            ui.label(RichText::new(preset.label).color(Color32::from_rgb(255, 190, 70)));
        }

        if has_prompt {
            ui.separator();
            ui.label(
                RichText::new("Prompt ready")
                    .color(Color32::from_rgb(140, 200, 170))
                    .strong(),
            );
        }
    });

    if menu_action == MenuAction::None && original_theme != *theme {
        menu_action = MenuAction::ThemeChanged;
    }

    menu_action
}
