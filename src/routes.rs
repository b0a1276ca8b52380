//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every Leptos route is server-rendered with the runtime `AppConfig` in
//! context. Paths outside the route list still render the app shell so the
//! client router can show its login fallback.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::config::AppConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream_with_context};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::HostError;

/// Build the full HTTP router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: AppConfig) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let provide_config = {
        let config = config.clone();
        move || provide_context(config.clone())
    };
    let render_shell = {
        let opts = leptos_options.clone();
        move || client::app::shell(opts.clone(), config.clone())
    };

    let router = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes_with_context(&leptos_options, routes, provide_config.clone(), render_shell.clone())
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(render_app_to_stream_with_context(provide_config, render_shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    Ok(router)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
