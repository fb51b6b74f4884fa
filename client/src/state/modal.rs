//! Lifecycle of an edit/create modal.
//!
//! ```text
//! Editing ──submit──▶ Saving ──ok──▶ Closed
//! Saving ──failed──▶ Editing
//! Editing ──delete──▶ ConfirmingDelete ──confirm──▶ Closed
//! ConfirmingDelete ──cancel──▶ Editing
//! ```
//!
//! Escape closes from every phase. A save response that arrives after the
//! modal closed is ignored by the caller (`save_succeeded` returns `false`).

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Phase of an open (or just closed) modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    /// Draft is editable.
    #[default]
    Editing,
    /// Update/create call in flight; inputs are disabled.
    Saving,
    /// The delete confirmation sub-dialog is showing.
    ConfirmingDelete,
    /// The modal is done; its draft is discarded.
    Closed,
}

/// What a key press asks the modal to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    Save,
}

/// Kind of element focused when a key was pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyTarget {
    /// A text field, or nothing in particular.
    #[default]
    Field,
    /// A button or select; Enter activates the control itself.
    Control,
}

impl KeyTarget {
    /// Classify an element by its tag name (`BUTTON`, `select`, ...).
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("button") || tag.eq_ignore_ascii_case("select") {
            Self::Control
        } else {
            Self::Field
        }
    }
}

impl ModalPhase {
    /// Editing -> Saving. Returns whether a save should be issued.
    pub fn submit(&mut self) -> bool {
        if *self != Self::Editing {
            return false;
        }
        *self = Self::Saving;
        true
    }

    /// Saving -> Closed. Returns whether the parent should be notified.
    pub fn save_succeeded(&mut self) -> bool {
        if *self != Self::Saving {
            return false;
        }
        *self = Self::Closed;
        true
    }

    /// Saving -> Editing, so the user can retry.
    pub fn save_failed(&mut self) {
        if *self == Self::Saving {
            *self = Self::Editing;
        }
    }

    /// Editing -> ConfirmingDelete.
    pub fn request_delete(&mut self) -> bool {
        if *self != Self::Editing {
            return false;
        }
        *self = Self::ConfirmingDelete;
        true
    }

    /// ConfirmingDelete -> Editing.
    pub fn cancel_delete(&mut self) {
        if *self == Self::ConfirmingDelete {
            *self = Self::Editing;
        }
    }

    /// ConfirmingDelete -> Closed. Returns whether the delete should be issued.
    pub fn confirm_delete(&mut self) -> bool {
        if *self != Self::ConfirmingDelete {
            return false;
        }
        *self = Self::Closed;
        true
    }

    /// Any phase -> Closed.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self != Self::Closed
    }

    #[must_use]
    pub fn inputs_disabled(self) -> bool {
        matches!(self, Self::Saving | Self::Closed)
    }

    #[must_use]
    pub fn is_confirming_delete(self) -> bool {
        self == Self::ConfirmingDelete
    }

    /// Keyboard contract: Escape closes from anywhere, Enter saves only while
    /// editing and only when a field (not a button or select) has focus.
    #[must_use]
    pub fn key_action(self, key: &str, target: KeyTarget) -> Option<KeyAction> {
        match key {
            "Escape" if self.is_open() => Some(KeyAction::Close),
            "Enter" if self == Self::Editing && target == KeyTarget::Field => Some(KeyAction::Save),
            _ => None,
        }
    }

    /// Label of the primary button.
    #[must_use]
    pub fn save_label(self) -> &'static str {
        if self == Self::Saving { "Saving..." } else { "Save" }
    }
}
