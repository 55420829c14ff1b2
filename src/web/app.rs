use std::path::Path;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::ActivityRegistry;
use crate::web::routes::activities;

/// JSON API only; no static files.
pub fn api_router(registry: ActivityRegistry) -> Router {
    Router::new()
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::activity_signup_handler),
        )
        .with_state(registry)
}

pub fn build_app(registry: ActivityRegistry, static_dir: &Path) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .merge(api_router(registry))
        .nest_service("/static", get_service(ServeDir::new(static_dir)))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
