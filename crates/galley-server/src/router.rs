use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{dishes, fallback, health, orders};
use crate::state::AppState;

/// Every route and the methods it accepts. Other methods get a 405.
pub const ROUTES: &[(&str, &[&str])] = &[
    ("/dishes", &["GET", "POST"]),
    ("/dishes/:dish_id", &["GET", "PUT"]),
    ("/orders", &["GET", "POST"]),
    ("/orders/:order_id", &["GET", "PUT", "DELETE"]),
    ("/health", &["GET"]),
];

/// Build the axum router with all Galley endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/dishes",
            get(dishes::list)
                .post(dishes::create)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/dishes/:dish_id",
            get(dishes::read)
                .put(dishes::update)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/orders",
            get(orders::list)
                .post(orders::create)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/orders/:order_id",
            get(orders::read)
                .put(orders::update)
                .delete(orders::destroy)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/health",
            get(health::health).fallback(fallback::method_not_allowed),
        )
        .fallback(fallback::path_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
