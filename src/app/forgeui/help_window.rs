use super::window_focus::FocusableWindow;
use eframe::egui;
use egui::{Context, RichText, Ui};

#[derive(Default)]
pub struct HelpWindow {
    pub open: bool,
}

impl HelpWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &Context) {
        self.show_with_focus(ctx, false);
    }

    pub fn show_with_focus(&mut self, ctx: &Context, bring_to_front: bool) {
        if !self.open {
            return;
        }

        let central_panel_size = ctx.available_rect().size();
        let window_width = central_panel_size.x.min(520.0);
        let window_height = central_panel_size.y.min(460.0);

        let mut window = egui::Window::new("Help")
            .fixed_size([window_width, window_height])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .resizable(false)
            .collapsible(false);

        if bring_to_front {
            window = window.order(egui::Order::Foreground);
        }

        window.show(ctx, |ui| {
            self.ui_content(ui);
        });
    }

    fn ui_content(&self, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(5.0);

            ui.heading("Workflow");
            ui.add_space(5.0);

            ui.label("1. Fill in the concept fields - title, setting, characters, conflict, twist");
            ui.label("2. Pick a tonal preset and the gameplay pillars that matter");
            ui.label("3. Generate the prompt and review it in the output section");
            ui.label("4. Copy it into ChatGPT, Claude, Gemini, or any creative copilot");

            ui.add_space(15.0);

            ui.heading("Keyboard Shortcuts");
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Ctrl+Enter").strong());
                ui.label("- Generate the prompt from the current draft");
            });

            ui.add_space(15.0);

            ui.heading("Good to Know");
            ui.add_space(5.0);

            ui.label(
                "Every field is optional. Leaving the tone or mechanics unset swaps in a \
                 generic instruction instead, and an empty \"Must include\" section is \
                 dropped from the output entirely.",
            );
            ui.add_space(8.0);
            ui.label(
                "Clear Inputs wipes every field and the generated prompt. Drafts are not \
                 saved between sessions - only the color theme is remembered.",
            );

            ui.add_space(15.0);
            ui.weak(format!("Prompt Forge {}", env!("CARGO_PKG_VERSION")));
            ui.add_space(10.0);
        });
    }
}

impl FocusableWindow for HelpWindow {
    type ShowParams = super::window_focus::SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "help_window"
    }

    fn window_title(&self) -> String {
        "Help".to_string()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        _params: Self::ShowParams,
        bring_to_front: bool,
    ) {
        HelpWindow::show_with_focus(self, ctx, bring_to_front);
    }
}
