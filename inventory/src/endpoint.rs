//! Request shapes for every (resource, verb) pair of the inventory API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client sends these with `gloo-net`, the CLI with `reqwest`.
//! Paths are fixed by the backend; update and delete always carry the
//! primary key as `pk` in the JSON body.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::{ChemicalFields, HazardType, MaterialFields, NewBorrower};

pub const LIST_EQUIPMENT: &str = "/api/equipment/get_equipment/";
pub const ADD_EQUIPMENT: &str = "/api/equipment/add_equipment/";
pub const EDIT_EQUIPMENT: &str = "/api/equipment/edit_equipment/";
pub const DELETE_EQUIPMENT: &str = "/api/equipment/delete_equipment/";

pub const LIST_CHEMICALS: &str = "/api/chemicals/get_chemicals/";
pub const ADD_CHEMICAL: &str = "/api/chemicals/add_chemical/";
pub const EDIT_CHEMICAL: &str = "/api/chemicals/edit_chemical/";
pub const DELETE_CHEMICAL: &str = "/api/chemicals/delete_chemical/";

pub const LIST_USERS: &str = "/user/user/userget/";
pub const CREATE_BORROWER: &str = "/user/user/create_borrower/";

/// Query parameter used to filter the chemical list.
pub const HAZARD_TYPE_PARAM: &str = "hazard_type";

/// HTTP verbs used by the inventory API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully described API call, independent of the HTTP stack that sends it.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Absolute path on the API host, always with a trailing slash.
    pub path: &'static str,
    /// Unencoded query pairs; the sending stack percent-encodes them.
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: HttpMethod, path: &'static str) -> Self {
        Self { method, path, query: Vec::new(), body: None }
    }

    fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Join the path onto `base` (scheme + host, optional trailing slash).
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}

// =============================================================================
// EQUIPMENT
// =============================================================================

#[must_use]
pub fn list_materials() -> ApiRequest {
    ApiRequest::new(HttpMethod::Get, LIST_EQUIPMENT)
}

#[must_use]
pub fn create_material(fields: &MaterialFields) -> ApiRequest {
    ApiRequest::new(HttpMethod::Post, ADD_EQUIPMENT).with_body(json_body(fields))
}

#[must_use]
pub fn update_material(pk: i64, fields: &MaterialFields) -> ApiRequest {
    ApiRequest::new(HttpMethod::Put, EDIT_EQUIPMENT).with_body(keyed_body(pk, fields))
}

#[must_use]
pub fn delete_material(pk: i64) -> ApiRequest {
    ApiRequest::new(HttpMethod::Delete, DELETE_EQUIPMENT).with_body(pk_body(pk))
}

// =============================================================================
// CHEMICALS
// =============================================================================

/// List chemicals, optionally restricted to one hazard class.
#[must_use]
pub fn list_chemicals(hazard: Option<HazardType>) -> ApiRequest {
    let mut request = ApiRequest::new(HttpMethod::Get, LIST_CHEMICALS);
    if let Some(hazard) = hazard {
        request.query.push((HAZARD_TYPE_PARAM, hazard.label().to_owned()));
    }
    request
}

#[must_use]
pub fn create_chemical(fields: &ChemicalFields) -> ApiRequest {
    ApiRequest::new(HttpMethod::Post, ADD_CHEMICAL).with_body(json_body(fields))
}

#[must_use]
pub fn update_chemical(pk: i64, fields: &ChemicalFields) -> ApiRequest {
    ApiRequest::new(HttpMethod::Patch, EDIT_CHEMICAL).with_body(keyed_body(pk, fields))
}

#[must_use]
pub fn delete_chemical(pk: i64) -> ApiRequest {
    ApiRequest::new(HttpMethod::Delete, DELETE_CHEMICAL).with_body(pk_body(pk))
}

// =============================================================================
// USERS
// =============================================================================

#[must_use]
pub fn list_users() -> ApiRequest {
    ApiRequest::new(HttpMethod::Get, LIST_USERS)
}

#[must_use]
pub fn create_borrower(borrower: &NewBorrower) -> ApiRequest {
    ApiRequest::new(HttpMethod::Post, CREATE_BORROWER).with_body(json_body(borrower))
}

// =============================================================================
// BODIES
// =============================================================================

// Model types are plain structs with string keys; serializing them cannot fail.
fn json_body<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

fn keyed_body<T: Serialize>(pk: i64, fields: &T) -> Value {
    let mut body = match json_body(fields) {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    body.insert("pk".to_owned(), Value::from(pk));
    Value::Object(body)
}

fn pk_body(pk: i64) -> Value {
    serde_json::json!({ "pk": pk })
}
