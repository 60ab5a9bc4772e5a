//! HTTP API server for the order management system.
//!
//! Exposes create/read/update/delete endpoints for orders under `/orders`,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use domain::OrderService;
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::OrderStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: OrderStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check::<S>))
        .route("/orders/addOrder", post(routes::orders::add_order::<S>))
        .route("/orders/allOrders", get(routes::orders::all_orders::<S>))
        .route(
            "/orders/findByIdAndName",
            get(routes::orders::find_by_id_and_name::<S>),
        )
        .route("/orders/{orderid}", get(routes::orders::get_order::<S>))
        .route(
            "/orders/updateOrder/{orderid}",
            put(routes::orders::update_order::<S>),
        )
        .route(
            "/orders/deleteOrder/{orderid}",
            delete(routes::orders::delete_order::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around the given store.
pub fn create_state<S: OrderStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        order_service: OrderService::new(store),
    })
}
