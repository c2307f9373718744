//! Composed prompt display with clipboard copy and a timed confirmation.
//!
//! The panel owns the last generated prompt and the "Copied!" confirmation
//! state. Copying goes through egui's platform clipboard integration; failures
//! stay inside the backend and surface only in the application log, so the
//! user simply never sees the confirmation flip.

use eframe::egui;
use egui::RichText;
use std::time::{Duration, Instant};

/// How long the copy button reads "Copied!" before reverting.
const COPIED_CONFIRMATION: Duration = Duration::from_millis(2800);

const EMPTY_STATE: &str = "Fill in your romantic game concept details and generate a bespoke \
AI prompt ready for ChatGPT, Claude, Gemini, or any creative copilot.";

#[derive(Default)]
pub struct OutputPanel {
    prompt: String,
    copied_at: Option<Instant>,
}

impl OutputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn has_prompt(&self) -> bool {
        !self.prompt.is_empty()
    }

    /// Install a freshly composed prompt. Any pending copy confirmation is
    /// dropped - it referred to the previous text.
    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
        self.copied_at = None;
    }

    pub fn clear(&mut self) {
        self.prompt.clear();
        self.copied_at = None;
    }

    /// Whether the confirmation indicator is still within its display window.
    /// Re-copying restarts the window; only one timestamp ever exists.
    pub fn copy_confirmation_active(&self) -> bool {
        matches!(self.copied_at, Some(copied_at) if copied_at.elapsed() < COPIED_CONFIRMATION)
    }

    fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Production-ready prompt");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let copied = self.copy_confirmation_active();
                let label = if copied {
                    RichText::new("Copied!").color(egui::Color32::from_rgb(123, 228, 183))
                } else {
                    RichText::new("Copy prompt")
                };

                if ui
                    .add_enabled(self.has_prompt(), egui::Button::new(label))
                    .clicked()
                {
                    ui.ctx().copy_text(self.prompt.clone());
                    self.mark_copied();
                    log_info!("Prompt copied to clipboard ({} chars)", self.prompt.len());
                }
            });
        });
        ui.add_space(6.0);

        ui.group(|ui| {
            ui.set_min_height(120.0);
            ui.set_width(ui.available_width());
            if self.has_prompt() {
                egui::ScrollArea::vertical()
                    .id_salt("prompt_output")
                    .max_height(320.0)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        ui.label(&self.prompt);
                    });
            } else {
                ui.weak(EMPTY_STATE);
            }
        });

        // Keep repainting until the confirmation lapses so the button reverts
        // without further input events.
        if let Some(copied_at) = self.copied_at {
            let remaining = COPIED_CONFIRMATION.saturating_sub(copied_at.elapsed());
            if !remaining.is_zero() {
                ui.ctx().request_repaint_after(remaining);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_prompt_resets_confirmation() {
        let mut panel = OutputPanel::new();
        panel.set_prompt("first".to_string());
        panel.mark_copied();
        assert!(panel.copy_confirmation_active());

        panel.set_prompt("second".to_string());
        assert!(!panel.copy_confirmation_active());
        assert_eq!(panel.prompt(), "second");
    }

    #[test]
    fn test_clear_drops_prompt_and_confirmation() {
        let mut panel = OutputPanel::new();
        panel.set_prompt("text".to_string());
        panel.mark_copied();

        panel.clear();
        assert!(!panel.has_prompt());
        assert!(!panel.copy_confirmation_active());
    }

    #[test]
    fn test_confirmation_expires_after_window() {
        let mut panel = OutputPanel::new();
        panel.set_prompt("text".to_string());

        // Backdate the copy past the confirmation window
        panel.copied_at = Instant::now().checked_sub(COPIED_CONFIRMATION + Duration::from_secs(1));
        assert!(panel.copied_at.is_some());
        assert!(!panel.copy_confirmation_active());
    }

    #[test]
    fn test_recopy_restarts_confirmation_window() {
        let mut panel = OutputPanel::new();
        panel.set_prompt("text".to_string());

        panel.copied_at = Instant::now().checked_sub(COPIED_CONFIRMATION + Duration::from_secs(1));
        assert!(!panel.copy_confirmation_active());

        panel.mark_copied();
        assert!(panel.copy_confirmation_active());
    }
}
