use super::draft_form::{self, FormAction};
use super::help_window::HelpWindow;
use super::log_window::LogWindow;
use super::menu;
use super::output_panel::OutputPanel;
use super::window_focus::{FocusableWindow, WindowFocusManager};
use crate::app::composer::compose_prompt;
use crate::app::draft::PromptDraft;
use eframe::egui;
use tracing::info;

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

/// Main application state: the draft, the composed output, and all windows.
///
/// Only the theme survives restarts. The draft is deliberately transient -
/// it starts from the built-in example concept on every launch.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ForgeApp {
    pub theme: ThemeChoice,

    #[serde(skip)]
    pub draft: PromptDraft,
    #[serde(skip)]
    pub output: OutputPanel,
    #[serde(skip)]
    pub help_window: HelpWindow,
    #[serde(skip)]
    pub log_window: LogWindow,
    #[serde(skip)]
    window_focus_manager: WindowFocusManager,
}

impl Default for ForgeApp {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            draft: PromptDraft::default(),
            output: OutputPanel::new(),
            help_window: HelpWindow::new(),
            log_window: LogWindow::new(),
            window_focus_manager: WindowFocusManager::new(),
        }
    }
}

impl ForgeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app: Self = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        // Apply the saved theme
        app.apply_theme(&cc.egui_ctx);

        app
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        match self.theme {
            ThemeChoice::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
            ThemeChoice::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
            ThemeChoice::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
            ThemeChoice::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
        }

        // More square window corners
        let mut style = (*ctx.style()).clone();
        style.visuals.window_corner_radius = egui::CornerRadius::same(2);
        ctx.set_style(style);
    }

    /// Compose the current draft into the output panel. Idempotent; any
    /// pending copy confirmation is dropped with the replaced text.
    pub fn generate_prompt(&mut self) {
        self.output.set_prompt(compose_prompt(&self.draft));
        info!(
            "Prompt generated ({} chars) for draft '{}'",
            self.output.prompt().len(),
            self.draft.working_title
        );
    }

    /// Reset every field to empty/unselected and drop the composed output.
    pub fn clear_inputs(&mut self) {
        self.draft.clear();
        self.output.clear();
        info!("Draft cleared");
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        // Ctrl+Enter (Cmd+Enter on macOS) composes the current draft
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter)) {
            self.generate_prompt();
        }
    }

    fn render_top_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let menu_action = menu::build_menu(
                    ui,
                    ctx,
                    &mut self.theme,
                    &mut self.help_window.open,
                    &mut self.log_window.open,
                    &self.draft,
                    self.output.has_prompt(),
                );

                match menu_action {
                    menu::MenuAction::ThemeChanged => {
                        info!("Theme changed to {}", self.theme);
                    }
                    menu::MenuAction::GeneratePrompt => {
                        self.generate_prompt();
                    }
                    menu::MenuAction::ClearInputs => {
                        self.clear_inputs();
                    }
                    menu::MenuAction::FocusWindow(window_id) => {
                        self.window_focus_manager.request_focus(window_id.to_string());
                    }
                    menu::MenuAction::Quit => {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    menu::MenuAction::None => {}
                }
            });
        });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Romantic game prompt lab")
                            .small()
                            .color(egui::Color32::from_rgb(255, 145, 200)),
                    );
                    ui.heading("Design irresistible romantic game prompts");
                    ui.label(
                        "Shape a vivid creative brief ready for any AI copilot. Blend emotional \
                         arcs, interactive mechanics, and atmospheric details into a single, \
                         production-ready prompt tailored for romantic game devs.",
                    );
                    ui.add_space(16.0);

                    match draft_form::show(ui, &mut self.draft) {
                        FormAction::Generate => self.generate_prompt(),
                        FormAction::Clear => self.clear_inputs(),
                        FormAction::None => {}
                    }

                    ui.add_space(18.0);
                    ui.separator();
                    ui.add_space(10.0);

                    self.output.show(ui);

                    ui.add_space(14.0);
                    ui.weak(
                        "Crafted for devs blending interactive storytelling and romance. Re-run \
                         the generator with fresh moods, mechanics, or twists to iterate fast.",
                    );
                    ui.add_space(10.0);
                });
        });
    }

    fn handle_help_window(&mut self, ctx: &egui::Context) {
        if self.help_window.is_open() {
            let window_id = self.help_window.window_id();
            let bring_to_front = self.window_focus_manager.should_bring_to_front(window_id);
            if bring_to_front {
                self.window_focus_manager.clear_bring_to_front(window_id);
            }

            FocusableWindow::show_with_focus(&mut self.help_window, ctx, (), bring_to_front);
        }
    }

    fn handle_log_window(&mut self, ctx: &egui::Context) {
        if self.log_window.is_open() {
            let window_id = self.log_window.window_id();
            let bring_to_front = self.window_focus_manager.should_bring_to_front(window_id);
            if bring_to_front {
                self.window_focus_manager.clear_bring_to_front(window_id);
            }

            FocusableWindow::show_with_focus(&mut self.log_window, ctx, (), bring_to_front);
        }
    }
}

impl eframe::App for ForgeApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);

        self.render_top_menu_bar(ctx);
        self.render_central_panel(ctx);

        self.handle_help_window(ctx);
        self.handle_log_window(ctx);
    }
}
