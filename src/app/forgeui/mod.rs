//! Desktop user interface implementation for Prompt Forge.
//!
//! The interface is a single-page form in the central panel plus a small set
//! of floating windows, following a window-based architecture:
//!
//! - **Trait-based Windows**: floating windows implement
//!   [`window_focus::FocusableWindow`] for consistent focus behavior
//! - **Focus Coordination**: [`window_focus::WindowFocusManager`] brings a
//!   window to the foreground when selected from the Windows menu
//! - **Theme Support**: Latte, Frappe, Macchiato, and Mocha color schemes via
//!   Catppuccin, persisted across sessions
//!
//! # Components
//!
//! - [`app::ForgeApp`] - Main application coordinator and state owner
//! - [`draft_form`] - The creative-brief form bound to the draft fields
//! - [`output_panel::OutputPanel`] - Composed prompt display with clipboard
//!   copy and a timed "Copied!" confirmation
//! - [`help_window::HelpWindow`] - Usage documentation and shortcuts
//! - [`log_window::LogWindow`] - Real-time viewer over the application log

pub mod app;
pub mod draft_form;
pub mod help_window;
pub mod log_window;
pub mod menu;
pub mod output_panel;
pub mod window_focus;

pub use app::ForgeApp;
pub use help_window::HelpWindow;
pub use log_window::LogWindow;
pub use output_panel::OutputPanel;
pub use window_focus::{FocusableWindow, SimpleShowParams, WindowFocusManager};
