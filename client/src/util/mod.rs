//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (body scroll, window listeners,
//! raw input elements) from page and component logic.

pub mod modal_guard;
