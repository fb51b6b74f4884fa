//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! List views own the collection a page injects and host the modals; rows are
//! pure presentation; modals own their draft and phase and report back
//! through callbacks.

pub mod add_borrower_dialog;
pub mod chemical_form;
pub mod chemical_list;
pub mod chemical_row;
pub mod collection;
pub mod delete_confirm_dialog;
pub mod material_form;
pub mod material_list;
pub mod material_row;
pub mod modal;
pub mod row_action;
