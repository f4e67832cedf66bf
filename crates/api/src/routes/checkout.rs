use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/checkout/validate",
            post(handlers::checkout::validate_checkout),
        )
        .route("/api/locations", get(handlers::checkout::list_locations))
}
