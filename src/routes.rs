//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own. It server-renders the Leptos app, serves
//! the compiled WASM/JS/CSS bundle, and answers a health probe.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR routes + static bundle + `/healthz`.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let (mount, dir) = pkg_service_paths(&leptos_options.site_root, &leptos_options.site_pkg_dir);
    tracing::debug!(%mount, dir = %dir.display(), "serving static bundle");

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service(&mount, ServeDir::new(dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

/// URL prefix and directory for the compiled client bundle.
fn pkg_service_paths(site_root: &str, site_pkg_dir: &str) -> (String, PathBuf) {
    let pkg = site_pkg_dir.trim_matches('/');
    (format!("/{pkg}"), PathBuf::from(site_root).join(pkg))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
