//! Checkout validation.
//!
//! The storefront lists slots with [`BookingWindow::slots_for`], but a customer
//! may sit on the form past a cutoff. Submission therefore re-runs the slot
//! policy against the clock at the moment of submission, alongside the form's
//! field rules. All failing fields are reported at once.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::errors::{FieldErrors, SlotError, SlotResult};
use crate::models::checkout::{CheckoutRequest, OrderSummary, PaymentMethod, DELIVERY_LOCATIONS};
use crate::models::time_slot::TimeSlot;
use crate::policy::{BookingRequest, BookingWindow};

static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

static TRANSACTION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("transaction id pattern is valid"));

const TRANSACTION_ID_MIN_LEN: usize = 8;
const TRANSACTION_ID_MAX_LEN: usize = 50;

pub const DATE_PASSED_MESSAGE: &str = "Selected date has passed";

impl CheckoutRequest {
    /// Validates the form at `now` and returns the normalised order.
    ///
    /// # Errors
    ///
    /// * `SlotError::InvalidFields` - one entry per failing field
    pub fn validate(&self, now: NaiveDateTime, window: &BookingWindow) -> SlotResult<OrderSummary> {
        let mut errors = FieldErrors::new();

        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            errors.add("customer_name", "Name is required");
        }

        if !PHONE_NUMBER.is_match(&self.phone_number) {
            errors.add("phone_number", "Please enter a valid 10-digit phone number");
        }

        if self.start_date.is_none() {
            errors.add("start_date", "Start date is required");
        }

        let shift = self.preferred_shift.trim();
        let slot = if shift.is_empty() {
            errors.add("preferred_shift", "Please select a shift");
            None
        } else {
            let slot = TimeSlot::find(shift);
            if slot.is_none() {
                errors.add("preferred_shift", "Unknown time slot");
            }
            slot
        };

        if let (Some(slot), Some(date)) = (slot, self.start_date) {
            let request =
                BookingRequest::new(now, Some(date), slot.value).with_plan(self.plan.plan_type);
            if let Some(restriction) = window.restriction(&request) {
                tracing::debug!(
                    "Rejecting slot {} on {}: {:?}",
                    slot.value,
                    date,
                    restriction
                );
                errors.add(
                    "preferred_shift",
                    restriction.message().unwrap_or(DATE_PASSED_MESSAGE),
                );
            }
        }

        let total_price = self.plan.total_price();
        if total_price.is_none() {
            errors.add("plan", "Plan price is out of range");
        }

        let nearby_location = self.nearby_location.trim();
        if !DELIVERY_LOCATIONS.contains(&nearby_location) {
            errors.add("nearby_location", "Nearby Location is required");
        }

        let address = self.address.trim();
        if address.is_empty() {
            errors.add("address", "Address is required");
        }

        let transaction_id = match self.payment_method {
            PaymentMethod::Upi => {
                let id = self.transaction_id.as_deref().unwrap_or("").trim();
                if let Some(message) = transaction_id_error(id) {
                    errors.add("transaction_id", message);
                }
                Some(id.to_string())
            }
            PaymentMethod::Cod => None,
        };

        // All present whenever no field failed.
        let (Some(slot), Some(start_date), Some(total_price), true) =
            (slot, self.start_date, total_price, errors.is_empty())
        else {
            return Err(SlotError::InvalidFields(errors));
        };

        Ok(OrderSummary {
            plan: self.plan.label(),
            plan_type: self.plan.plan_type,
            juice_pack: self.plan.juice_added,
            selected_juices: self.plan.selected_juices.clone(),
            total_price,
            customer_name: customer_name.to_string(),
            phone_number: self.phone_number.clone(),
            start_date,
            preferred_shift: slot.value.to_string(),
            slot_category: slot.category,
            nearby_location: nearby_location.to_string(),
            address: address.to_string(),
            payment_method: self.payment_method,
            transaction_id,
        })
    }
}

fn transaction_id_error(id: &str) -> Option<&'static str> {
    if id.is_empty() {
        Some("Transaction ID is mandatory for UPI payments")
    } else if id.chars().count() < TRANSACTION_ID_MIN_LEN {
        Some("Transaction ID should be at least 8 characters long")
    } else if id.chars().count() > TRANSACTION_ID_MAX_LEN {
        Some("Transaction ID is too long (max 50 characters)")
    } else if !TRANSACTION_ID.is_match(id) {
        Some("Transaction ID can only contain letters, numbers, hyphens, and underscores")
    } else {
        None
    }
}
