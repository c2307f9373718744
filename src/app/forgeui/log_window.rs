//! Real-time viewer over the application log file.
//!
//! A background thread tails the log file and ships parsed lines over an mpsc
//! channel; the window drains the channel each frame. The watcher never
//! touches draft state.

use super::window_focus::FocusableWindow;
use eframe::egui;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

const MAX_LOG_LINES: usize = 1000;
const UPDATE_INTERVAL_MS: u64 = 100;

/// Location of the application log file, shared with the logging setup.
pub fn log_file_path() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "promptforge") {
        proj_dirs.data_dir().join("logs").join("promptforge.log")
    } else {
        PathBuf::from("./promptforge.log")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "ERROR" => LogLevel::Error,
            "WARN" | "WARNING" => LogLevel::Warn,
            "INFO" => LogLevel::Info,
            "DEBUG" => LogLevel::Debug,
            "TRACE" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    fn rank(self) -> u8 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Trace => 4,
        }
    }

    fn should_show(self, filter_level: LogLevel) -> bool {
        self.rank() <= filter_level.rank()
    }

    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

#[derive(Clone)]
pub struct LogMessage {
    pub timestamp: String,
    pub level: String,
    pub message: String,
    pub full_line: String,
}

pub struct LogWindow {
    pub open: bool,
    log_path: PathBuf,
    log_messages: VecDeque<LogMessage>,
    log_receiver: Receiver<Vec<LogMessage>>,
    auto_scroll: bool,
    search_query: String,
    filter_level: LogLevel,
}

impl Default for LogWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWindow {
    pub fn new() -> Self {
        let log_path = log_file_path();
        let (sender, receiver) = channel();

        start_watcher(log_path.clone(), sender);

        Self {
            open: false,
            log_path,
            log_messages: VecDeque::with_capacity(MAX_LOG_LINES),
            log_receiver: receiver,
            auto_scroll: true,
            search_query: String::new(),
            filter_level: LogLevel::Info,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.show_with_focus(ctx, false);
    }

    pub fn show_with_focus(&mut self, ctx: &egui::Context, bring_to_front: bool) {
        if !self.open {
            return;
        }

        // Drain new messages from the watcher thread
        while let Ok(new_messages) = self.log_receiver.try_recv() {
            for msg in new_messages {
                self.log_messages.push_back(msg);
                while self.log_messages.len() > MAX_LOG_LINES {
                    self.log_messages.pop_front();
                }
            }
        }

        let screen_rect = ctx.screen_rect();
        let max_width = screen_rect.width() * 0.9;
        let max_height = screen_rect.height() * 0.9;

        let window = egui::Window::new("Log Viewer")
            .open(&mut self.open)
            .default_size([800.0_f32.min(max_width), 400.0_f32.min(max_height)])
            .max_size([max_width, max_height])
            .constrain(true)
            .resizable(true);
        let window =
            super::window_focus::WindowFocusManager::apply_focus_order(window, bring_to_front);

        window.show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Log file:");
                ui.monospace(self.log_path.display().to_string());

                ui.separator();

                ui.checkbox(&mut self.auto_scroll, "Auto-scroll");

                ui.separator();

                ui.label("Level:");
                egui::ComboBox::from_id_salt("log_filter_level")
                    .selected_text(self.filter_level.as_str())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.filter_level, LogLevel::Error, "ERROR");
                        ui.selectable_value(&mut self.filter_level, LogLevel::Warn, "WARN");
                        ui.selectable_value(&mut self.filter_level, LogLevel::Info, "INFO");
                        ui.selectable_value(&mut self.filter_level, LogLevel::Debug, "DEBUG");
                        ui.selectable_value(&mut self.filter_level, LogLevel::Trace, "TRACE");
                    });

                ui.separator();

                ui.label("Search:");
                ui.text_edit_singleline(&mut self.search_query);

                if ui.button("Clear").clicked() {
                    self.log_messages.clear();
                }
            });

            ui.separator();

            egui::ScrollArea::both()
                .auto_shrink([false; 2])
                .stick_to_bottom(self.auto_scroll)
                .show(ui, |ui| {
                    let total_messages = self.log_messages.len();
                    let mut shown_messages = 0;

                    for msg in self.log_messages.iter() {
                        if !LogLevel::from_str(&msg.level).should_show(self.filter_level) {
                            continue;
                        }

                        if !self.search_query.is_empty()
                            && !msg
                                .full_line
                                .to_lowercase()
                                .contains(&self.search_query.to_lowercase())
                        {
                            continue;
                        }

                        shown_messages += 1;

                        ui.horizontal(|ui| {
                            ui.style_mut().wrap_mode = Some(egui::TextWrapMode::Extend);

                            if !msg.timestamp.is_empty() {
                                ui.monospace(&msg.timestamp);
                            }

                            let level = LogLevel::from_str(&msg.level);
                            let level_color = match level {
                                LogLevel::Error => egui::Color32::from_rgb(255, 100, 100),
                                LogLevel::Warn => egui::Color32::from_rgb(255, 200, 100),
                                LogLevel::Info => egui::Color32::from_rgb(100, 200, 255),
                                LogLevel::Debug => egui::Color32::from_rgb(150, 150, 150),
                                LogLevel::Trace => egui::Color32::from_rgb(120, 120, 120),
                            };
                            ui.colored_label(level_color, level.as_str());

                            ui.monospace(&msg.message);
                        });
                    }

                    if shown_messages < total_messages {
                        ui.separator();
                        ui.label(format!(
                            "Showing {} of {} messages (filtered by level: {})",
                            shown_messages,
                            total_messages,
                            self.filter_level.as_str()
                        ));
                    }
                });
        });

        // Poll for new log lines while the window is open
        ctx.request_repaint_after(Duration::from_millis(UPDATE_INTERVAL_MS));
    }
}

/// Tail the log file from its current end, shipping parsed lines to the UI.
fn start_watcher(log_path: PathBuf, sender: Sender<Vec<LogMessage>>) {
    thread::spawn(move || {
        let mut last_position = 0u64;

        loop {
            thread::sleep(Duration::from_millis(UPDATE_INTERVAL_MS));

            let file = match File::open(&log_path) {
                Ok(f) => f,
                Err(_) => continue, // File doesn't exist yet
            };

            let mut reader = BufReader::new(file);

            if let Ok(metadata) = std::fs::metadata(&log_path) {
                // If the file was truncated or rotated, start over
                if metadata.len() < last_position {
                    last_position = 0;
                }
            }

            if reader.seek(SeekFrom::Start(last_position)).is_ok() {
                let mut new_messages = Vec::new();
                let mut line = String::new();

                while reader.read_line(&mut line).unwrap_or(0) > 0 {
                    if let Some(msg) = parse_log_line(&line) {
                        new_messages.push(msg);
                    }
                    line.clear();
                }

                if let Ok(pos) = reader.stream_position() {
                    last_position = pos;
                }

                if !new_messages.is_empty() && sender.send(new_messages).is_err() {
                    // UI side dropped the receiver
                    return;
                }
            }
        }
    });
}

/// Parse one tracing-formatted line: `TIMESTAMP LEVEL target: message`.
fn parse_log_line(line: &str) -> Option<LogMessage> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut parts = trimmed.split_whitespace();
    if let (Some(timestamp), Some(level)) = (parts.next(), parts.next()) {
        let looks_like_level = matches!(
            level.to_uppercase().as_str(),
            "ERROR" | "WARN" | "INFO" | "DEBUG" | "TRACE"
        );
        if looks_like_level {
            let message = parts.collect::<Vec<_>>().join(" ");
            return Some(LogMessage {
                timestamp: timestamp.to_string(),
                level: level.to_uppercase(),
                message,
                full_line: line.to_string(),
            });
        }
    }

    // Continuation lines (backtraces, wrapped output) keep the whole text
    Some(LogMessage {
        timestamp: String::new(),
        level: "INFO".to_string(),
        message: trimmed.to_string(),
        full_line: line.to_string(),
    })
}

impl FocusableWindow for LogWindow {
    type ShowParams = super::window_focus::SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "log_window"
    }

    fn window_title(&self) -> String {
        "Log Viewer".to_string()
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
        LogWindow::show_with_focus(self, ctx, bring_to_front);
    }
}
