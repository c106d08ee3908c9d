//! HTTP routing for the rendered pages.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use freeflow_site::{Route, render_dashboard, render_landing};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::config::ServerConfig;
use crate::identity::HeaderIdentity;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(Route::Landing.path(), get(landing))
        .route(Route::Dashboard.path(), get(dashboard))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}

async fn landing() -> Html<String> {
    Html(render_landing())
}

async fn dashboard(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let lookup = HeaderIdentity::new(&headers, &state.config.identity_header);
    Html(render_dashboard(&lookup))
}

/// Unknown paths get a 404. A known path with a trailing slash is
/// redirected to its canonical form.
async fn not_found(uri: Uri) -> Response {
    match Route::from_path(uri.path()) {
        Some(route) if route.path() != uri.path() => {
            let target = match uri.query() {
                Some(query) => format!("{}?{query}", route.path()),
                None => route.path().to_owned(),
            };
            Redirect::permanent(&target).into_response()
        }
        _ => {
            debug!(path = uri.path(), "no route");
            (StatusCode::NOT_FOUND, "404 - page not found").into_response()
        }
    }
}
