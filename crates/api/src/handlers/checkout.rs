//! # Checkout Handlers
//!
//! Submission-time checks for the checkout form. The storefront calls
//! `validate` right before it hands the order to its own persistence and
//! messaging integrations.

use std::sync::Arc;

use axum::{extract::State, Json};
use mealslot_core::models::checkout::{CheckoutRequest, OrderSummary, DELIVERY_LOCATIONS};
use serde::{Deserialize, Serialize};

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

/// Validates a checkout against the current time
///
/// # Endpoint
///
/// ```text
/// POST /api/checkout/validate
/// ```
///
/// # Errors
///
/// * `SlotError::InvalidFields` - one or more fields failed, including a
///   preferred shift that is no longer bookable
pub async fn validate_checkout(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<OrderSummary>, AppError> {
    let now = state.clock.now();

    match request.validate(now, &state.booking_window) {
        Ok(summary) => {
            tracing::info!(
                "Checkout accepted: plan={}, shift={}, start={}",
                summary.plan,
                summary.preferred_shift,
                summary.start_date
            );
            Ok(Json(summary))
        }
        Err(err) => {
            tracing::info!("Checkout rejected at {}: {}", now, err);
            Err(err.into())
        }
    }
}

/// Lists the nearby locations the kitchen delivers to
pub async fn list_locations() -> Json<LocationsResponse> {
    Json(LocationsResponse {
        locations: DELIVERY_LOCATIONS.iter().map(|l| l.to_string()).collect(),
    })
}
