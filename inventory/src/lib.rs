//! Shared stockroom model and REST contract.
//!
//! This crate owns the record types and the request/response rules used by
//! both the browser `client` and the `cli`. It performs no I/O: callers take
//! an [`endpoint::ApiRequest`] to whatever HTTP stack they run on and hand
//! the status and body back to [`response::decode`].

pub mod endpoint;
pub mod input;
pub mod model;
pub mod response;

pub use endpoint::{ApiRequest, HttpMethod};
pub use model::{
    Chemical, ChemicalFields, HazardType, InventoryRecord, Material, MaterialFields, NewBorrower, User,
};
pub use response::ResponseError;
