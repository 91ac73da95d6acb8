//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the read-only JSON API and the Leptos SSR pages under a
//! single Axum router. Compiled WASM, JS and CSS are served from `/pkg`.

pub mod explainers;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API and health check.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/explainers", get(explainers::list_explainers))
        .route("/api/explainers/{slug}", get(explainers::get_explainer))
        .route("/api/explainers/{slug}/records/{tag}", get(explainers::get_record))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes plus Leptos SSR pages and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let catalog = state.catalog.clone();
    let routes = generate_route_list({
        let catalog = catalog.clone();
        move || view! { <App catalog=catalog.clone()/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), catalog.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
