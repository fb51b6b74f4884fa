//! Networking for the inventory REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the only module that performs I/O. Request shapes and response
//! rules live in the shared `inventory` crate.

pub mod api;
