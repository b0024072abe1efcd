pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod site;
pub mod template;

pub use routes::AppState;

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Build the full application router with its middleware stack
///
/// Used by `serve` and by the integration tests, which drive it without
/// binding a socket.
pub fn create_app(config: config::Config) -> axum::Router {
    routes::router(AppState { config })
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
