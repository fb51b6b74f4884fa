//! Resource Client: one async call per (resource, verb) of the inventory API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin relay mounted by the host server.
//! Server-side (SSR): stubs returning `None`, since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and malformed bodies are logged to the
//! console and collapsed into `None`. Nothing here panics or retries; callers
//! treat `None` as "nothing changed".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use inventory::endpoint::{self, ApiRequest};
use inventory::{Chemical, ChemicalFields, HazardType, Material, MaterialFields, NewBorrower, User};
use serde_json::Value;

#[cfg(any(test, feature = "hydrate"))]
use inventory::response::ResponseError;

/// `"PUT /api/equipment/edit_equipment/"`, used to label diagnostics.
#[cfg(any(test, feature = "hydrate"))]
fn describe(request: &ApiRequest) -> String {
    format!("{} {}", request.method.as_str(), request.path)
}

#[cfg(any(test, feature = "hydrate"))]
fn failure_message(request: &ApiRequest, err: &ResponseError) -> String {
    format!("{} failed: {err}", describe(request))
}

/// Pair a 2xx/non-2xx status with its body, or log a body read failure as
/// a transport error.
#[cfg(any(test, feature = "hydrate"))]
fn read_body<E: std::fmt::Display>(request: &ApiRequest, status: u16, body: Result<String, E>) -> Option<(u16, String)> {
    match body {
        Ok(body) => Some((status, body)),
        Err(e) => {
            leptos::logging::warn!("{} transport error: {e}", describe(request));
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn gloo_method(method: inventory::HttpMethod) -> gloo_net::http::Method {
    use gloo_net::http::Method;
    use inventory::HttpMethod;

    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Send `request` to the relay and return status and body text.
#[cfg(feature = "hydrate")]
async fn send(request: &ApiRequest) -> Option<(u16, String)> {
    let builder = gloo_net::http::RequestBuilder::new(&request.url(""))
        .method(gloo_method(request.method))
        .header("Content-Type", "application/json")
        .query(request.query.iter().map(|(k, v)| (*k, v.as_str())));
    let built = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    };
    let resp = match built {
        Ok(req) => req.send().await,
        Err(e) => Err(e),
    };
    let resp = match resp {
        Ok(resp) => resp,
        Err(e) => {
            leptos::logging::warn!("{} transport error: {e}", describe(request));
            return None;
        }
    };
    let status = resp.status();
    read_body(request, status, resp.text().await)
}

/// Issue `request` and decode a JSON body of type `T`.
async fn fetch<T: serde::de::DeserializeOwned>(request: ApiRequest) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = send(&request).await?;
        inventory::response::decode::<T>(status, &body)
            .map_err(|e| leptos::logging::warn!("{}", failure_message(&request, &e)))
            .ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        None
    }
}

/// Issue a create `request` and decode the created record.
async fn fetch_created<T: serde::de::DeserializeOwned>(request: ApiRequest) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = send(&request).await?;
        inventory::response::decode_created::<T>(status, &body)
            .map_err(|e| leptos::logging::warn!("{}", failure_message(&request, &e)))
            .ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        None
    }
}

// =============================================================================
// EQUIPMENT
// =============================================================================

pub async fn list_materials() -> Option<Vec<Material>> {
    fetch(endpoint::list_materials()).await
}

pub async fn create_material(fields: &MaterialFields) -> Option<Material> {
    fetch_created(endpoint::create_material(fields)).await
}

/// `PUT` the full field set for `pk`; the body is returned as-is.
pub async fn update_material(pk: i64, fields: &MaterialFields) -> Option<Value> {
    fetch(endpoint::update_material(pk, fields)).await
}

pub async fn delete_material(pk: i64) -> Option<Value> {
    fetch(endpoint::delete_material(pk)).await
}

// =============================================================================
// CHEMICALS
// =============================================================================

/// List chemicals, optionally filtered to one hazard class.
pub async fn list_chemicals(hazard: Option<HazardType>) -> Option<Vec<Chemical>> {
    fetch(endpoint::list_chemicals(hazard)).await
}

pub async fn create_chemical(fields: &ChemicalFields) -> Option<Chemical> {
    fetch_created(endpoint::create_chemical(fields)).await
}

/// `PATCH` the field set for `pk`; the body is returned as-is.
pub async fn update_chemical(pk: i64, fields: &ChemicalFields) -> Option<Value> {
    fetch(endpoint::update_chemical(pk, fields)).await
}

pub async fn delete_chemical(pk: i64) -> Option<Value> {
    fetch(endpoint::delete_chemical(pk)).await
}

// =============================================================================
// USERS
// =============================================================================

pub async fn list_users() -> Option<Vec<User>> {
    fetch(endpoint::list_users()).await
}

pub async fn create_borrower(borrower: &NewBorrower) -> Option<Value> {
    fetch(endpoint::create_borrower(borrower)).await
}
