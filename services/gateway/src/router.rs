use crate::handlers::{health, vendor};
use crate::state::AppState;
use axum::{
    Router,
    http::HeaderName,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route(
            "/vendor",
            get(vendor::list_vendors).post(vendor::create_vendor),
        )
        .route(
            "/vendor/{id}",
            get(vendor::get_vendor).delete(vendor::delete_vendor),
        )
        .route("/vendor/{id}/risk", get(vendor::assess_vendor))
        .route("/vendor/{id}/assessments", get(vendor::list_assessments));

    let correlation_id = HeaderName::from_static(CORRELATION_ID_HEADER);

    Router::new()
        .nest("/api", api_routes)
        .layer(PropagateRequestIdLayer::new(correlation_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(SetRequestIdLayer::new(correlation_id, MakeRequestUuid))
        .with_state(state)
}
