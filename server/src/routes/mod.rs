//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the inventory relay and health check, and stitches them
//! with Leptos SSR rendering under a single Axum router. Compiled WASM/JS/CSS
//! is served from `/pkg`.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Relay and health routes, without the Leptos frontend.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/{*path}", any(proxy::relay))
        .route("/user/{*path}", any(proxy::relay))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, thiserror::Error)]
#[error("leptos configuration: {0}")]
pub struct LeptosConfigError(String);

/// Full application: relay routes + Leptos SSR + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` / `LEPTOS_*` environment).
pub fn app(state: AppState) -> Result<Router, LeptosConfigError> {
    let conf = get_configuration(None).map_err(|e| LeptosConfigError(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
