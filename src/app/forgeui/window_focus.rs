//! Window focus management.
//!
//! Trait-based system for bringing floating windows to the foreground when
//! selected from the Windows menu, instead of ad-hoc focus flags per window.

use eframe::egui;

/// Trait for windows that can be brought to the foreground.
///
/// Windows implement this trait to support being raised above their siblings
/// when selected from the Windows menu.
pub trait FocusableWindow {
    /// Parameters required by the show method. Simple windows use `()`.
    type ShowParams;

    /// Unique identifier for this window type. Must be unique across the
    /// application and stable across frames.
    fn window_id(&self) -> &'static str;

    /// Human-readable title, matching the window's title bar.
    fn window_title(&self) -> String;

    /// Whether this window is currently open.
    fn is_open(&self) -> bool;

    /// Render the window. When `bring_to_front` is true the window must be
    /// displayed with `egui::Order::Foreground`.
    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        params: Self::ShowParams,
        bring_to_front: bool,
    );
}

/// Parameters for windows that need no extra data.
pub type SimpleShowParams = ();

/// Tracks which window, if any, should be raised on the next frame.
///
/// Window handlers ask [`WindowFocusManager::should_bring_to_front`] before
/// rendering and clear the request once processed, so a window is raised for
/// exactly one frame per selection.
pub struct WindowFocusManager {
    bring_to_front_window: Option<String>,
}

impl WindowFocusManager {
    pub fn new() -> Self {
        Self {
            bring_to_front_window: None,
        }
    }

    /// Request that the window with this id be raised on the next frame.
    pub fn request_focus(&mut self, window_id: String) {
        self.bring_to_front_window = Some(window_id);
    }

    pub fn should_bring_to_front(&self, window_id: &str) -> bool {
        self.bring_to_front_window.as_deref() == Some(window_id)
    }

    /// Clear the request after the window has processed it, so it does not
    /// stay in foreground order indefinitely.
    pub fn clear_bring_to_front(&mut self, window_id: &str) {
        if self.should_bring_to_front(window_id) {
            self.bring_to_front_window = None;
        }
    }

    /// Apply foreground ordering to an egui window when requested.
    pub fn apply_focus_order(window: egui::Window<'_>, bring_to_front: bool) -> egui::Window<'_> {
        if bring_to_front {
            window.order(egui::Order::Foreground)
        } else {
            window
        }
    }
}

impl Default for WindowFocusManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_request_and_check() {
        let mut manager = WindowFocusManager::new();

        assert!(!manager.should_bring_to_front("help_window"));

        manager.request_focus("help_window".to_string());
        assert!(manager.should_bring_to_front("help_window"));
        assert!(!manager.should_bring_to_front("log_window"));
    }

    #[test]
    fn test_focus_clear() {
        let mut manager = WindowFocusManager::new();

        manager.request_focus("help_window".to_string());
        manager.clear_bring_to_front("help_window");
        assert!(!manager.should_bring_to_front("help_window"));
    }

    #[test]
    fn test_clear_wrong_window_keeps_request() {
        let mut manager = WindowFocusManager::new();

        manager.request_focus("help_window".to_string());
        manager.clear_bring_to_front("log_window");
        assert!(manager.should_bring_to_front("help_window"));
    }

    #[test]
    fn test_later_request_replaces_earlier() {
        let mut manager = WindowFocusManager::new();

        manager.request_focus("help_window".to_string());
        manager.request_focus("log_window".to_string());
        assert!(!manager.should_bring_to_front("help_window"));
        assert!(manager.should_bring_to_front("log_window"));
    }

    struct MockWindow {
        open: bool,
        last_bring_to_front: bool,
    }

    impl FocusableWindow for MockWindow {
        type ShowParams = SimpleShowParams;

        fn window_id(&self) -> &'static str {
            "mock_window"
        }

        fn window_title(&self) -> String {
            "Mock".to_string()
        }

        fn is_open(&self) -> bool {
            self.open
        }

        fn show_with_focus(
            &mut self,
            _ctx: &egui::Context,
            _params: Self::ShowParams,
            bring_to_front: bool,
        ) {
            self.last_bring_to_front = bring_to_front;
        }
    }

    #[test]
    fn test_trait_with_focus_manager() {
        let mut manager = WindowFocusManager::new();
        let window = MockWindow {
            open: true,
            last_bring_to_front: false,
        };

        assert!(window.is_open());
        manager.request_focus(window.window_id().to_string());
        assert!(manager.should_bring_to_front(window.window_id()));
        manager.clear_bring_to_front(window.window_id());
        assert!(!manager.should_bring_to_front(window.window_id()));
    }
}
