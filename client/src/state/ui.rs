//! Shell chrome state shared through context.
//!
//! DESIGN
//! ======
//! Pages set the header title on mount; the shell only reads it. Keeping it
//! out of the collection states lets pages change title without touching
//! inventory data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Default header text before any page has mounted.
pub const DEFAULT_TITLE: &str = "Stockroom";

/// UI state for the layout shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub header_title: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self { header_title: DEFAULT_TITLE.to_owned() }
    }
}

impl UiState {
    /// Replace the header title; blank titles fall back to the default.
    pub fn set_title(&mut self, title: &str) {
        let title = title.trim();
        self.header_title = if title.is_empty() { DEFAULT_TITLE.to_owned() } else { title.to_owned() };
    }
}
