//! Axum router construction.
//!
//! Builds the application router with all routes and middleware layers.
//! The surface is read-only: every route is a GET.

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::routes;

/// Build the complete Axum router.
pub fn build_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::welcome::welcome))
        .route("/health", get(routes::health::health_check))
        .route("/bakeries", get(routes::bakeries::list_bakeries))
        .route("/bakeries/{id}", get(routes::bakeries::get_bakery))
        .route("/baked_goods", get(routes::baked_goods::list_baked_goods))
        .route("/baked_goods/{id}", get(routes::baked_goods::get_baked_good))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
