//! # Slot Handlers
//!
//! Read-only views of the delivery slot catalog, evaluated against the
//! server clock on every request. Results are never cached: a slot that was
//! open a minute ago may have closed since.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, NaiveDateTime};
use mealslot_core::{
    errors::SlotError,
    models::{
        plan::PlanType,
        time_slot::{time_slot_category, SlotCategory},
    },
    policy::SlotAvailability,
};
use serde::{Deserialize, Serialize};

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the slot listing endpoint
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// Candidate delivery date as `YYYY-MM-DD`; omitted before a date is picked
    pub date: Option<String>,
    /// `trial` or `subscription`; trials starting today are limited to evenings
    pub plan: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    pub date: Option<NaiveDate>,
    pub evaluated_at: NaiveDateTime,
    pub slots: Vec<SlotAvailability>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub slot: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub slot: String,
    pub category: Option<SlotCategory>,
}

/// Lists every slot with its availability for the requested date
///
/// # Endpoint
///
/// ```text
/// GET /api/slots?date=2024-03-15&plan=trial
/// ```
///
/// # Errors
///
/// * `SlotError::Validation` - `date` is not a `YYYY-MM-DD` calendar date
/// * `SlotError::Validation` - `plan` is not a known plan type
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let date = query
        .date
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| {
            NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| {
                SlotError::Validation(format!("Invalid date '{}'. Expected YYYY-MM-DD", d))
            })
        })
        .transpose()?;

    let plan_type = match query.plan.as_deref().map(str::trim) {
        None | Some("") => None,
        Some("trial") => Some(PlanType::Trial),
        Some("subscription") => Some(PlanType::Subscription),
        Some(other) => {
            return Err(SlotError::Validation(format!("Unknown plan type '{}'", other)).into());
        }
    };

    let now = state.clock.now();
    let slots = state.booking_window.slots_for(now, date, plan_type);

    tracing::debug!(
        "Evaluated {} slots for {:?} at {}: {} open",
        slots.len(),
        date,
        now,
        slots.iter().filter(|s| s.availability.available).count()
    );

    Ok(Json(SlotsResponse {
        date,
        evaluated_at: now,
        slots,
    }))
}

/// Looks up the category of a slot value
///
/// # Endpoint
///
/// ```text
/// GET /api/slots/category?slot=6:00%20PM%20-%207:00%20PM
/// ```
///
/// Unknown values answer with `"category": null` rather than an error.
pub async fn slot_category(Query(query): Query<CategoryQuery>) -> Json<CategoryResponse> {
    let category = time_slot_category(&query.slot);
    Json(CategoryResponse {
        slot: query.slot,
        category,
    })
}
