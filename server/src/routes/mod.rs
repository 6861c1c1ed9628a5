//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the small JSON API with Leptos SSR rendering under a
//! single Axum router. Compiled WASM/CSS is served from `/pkg`. Any other
//! path is looked up in the site root on disk (worker scripts, favicon) and,
//! when no file matches, rendered by the app's not-found view.

pub mod data;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::StartupError;

/// API routes shared by the SSR app and any direct clients.
pub fn api_routes() -> Router {
    Router::new()
        .route("/api/some-data", get(data::some_data))
        .route("/healthz", get(healthz))
}

/// Full application: API routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns [`StartupError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[workspace.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        leptos_options.site_root = Arc::from(root.to_string_lossy().as_ref());
    }
    Ok(site_routes(leptos_options))
}

/// Router for already resolved Leptos options.
pub fn site_routes(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(portfolio_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portfolio_client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(portfolio_client::app::shell))
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root.join(leptos_options.site_pkg_dir.as_ref());
    tracing::info!(site_root = %site_root.display(), "serving static assets");

    api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
