//! Terminal setup and configuration utilities.
//!
//! This module handles low-level terminal event configuration:
//! - Bracketed paste mode (pasted text arrives as one event)
//! - Mouse capture (card clicks, buttons, popup backdrop, wheel scrolling)

use std::io::stdout;

use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;

/// Guard to ensure terminal event modes are disabled on drop.
///
/// This ensures proper cleanup even if the application panics.
pub struct TerminalEventGuard {
    bracketed_paste_enabled: bool,
    mouse_capture_enabled: bool,
}

impl TerminalEventGuard {
    #[must_use]
    pub fn new() -> Self {
        let mut guard = Self {
            bracketed_paste_enabled: false,
            mouse_capture_enabled: false,
        };

        match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => {
                log::debug!("bracketed paste mode enabled");
                guard.bracketed_paste_enabled = true;
            }
            Err(e) => {
                // Not fatal: pasted text then arrives as individual key events.
                log::warn!("could not enable bracketed paste mode: {e}");
            }
        }

        match execute!(stdout(), EnableMouseCapture) {
            Ok(()) => {
                log::debug!("mouse capture enabled");
                guard.mouse_capture_enabled = true;
            }
            Err(e) => {
                // Keyboard navigation still covers every action.
                log::warn!("could not enable mouse capture: {e}");
            }
        }

        guard
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        if self.mouse_capture_enabled {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        if self.bracketed_paste_enabled {
            let _ = execute!(stdout(), DisableBracketedPaste);
        }
    }
}
