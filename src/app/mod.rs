//! 应用层

pub mod product;

use axum::{middleware, response::Json, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::{
    metrics::{metrics_middleware, prometheus_handle},
    middleware::request_logging_middleware,
};
use product::AppState;

/// 组装完整路由
pub fn create_app(state: AppState, service_name: String, request_timeout: Duration) -> Router {
    let metrics_handle = prometheus_handle();

    Router::new()
        .route(
            "/health",
            get(move || {
                let service = service_name.clone();
                async move {
                    Json(serde_json::json!({
                        "status": "healthy",
                        "service": service,
                    }))
                }
            }),
        )
        .route(
            "/metrics",
            get(move || {
                let handle = metrics_handle.clone();
                async move { handle.render() }
            }),
        )
        .nest("/services", product::handler::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(middleware::from_fn(metrics_middleware))
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
