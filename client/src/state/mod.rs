//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own `CollectionState` signals and inject them into list views;
//! modals own their phase and draft; the shell provides `UiState` through
//! context. Everything here is plain data so it can be tested natively.

pub mod draft;
pub mod inventory;
pub mod modal;
pub mod session;
pub mod ui;
