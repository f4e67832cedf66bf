//! # Booking Window Policy
//!
//! Decides whether a delivery slot can be booked for a given date, and what
//! to tell the customer when it cannot. Two cutoffs apply independently:
//!
//! - **Same day**: a slot closes once its end hour has passed. Evening slots
//!   additionally close for the day at [`EVENING_CUTOFF_HOUR`].
//! - **Future dates**: bookings for any later day are refused while the
//!   current hour equals [`FUTURE_DATE_CUTOFF_HOUR`].
//!
//! Past dates are never bookable. Trial plans starting today are limited to
//! the evening shifts.
//!
//! Every function takes `now` explicitly. Days are compared as calendar
//! dates, so callers must pass `now` already converted to the business
//! timezone (see [`crate::clock`]).

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{SlotError, SlotResult};
use crate::models::plan::PlanType;
use crate::models::time_slot::{parse_slot_hours, SlotCategory, TimeSlot, TIME_SLOTS};

pub use crate::models::time_slot::time_slot_category;

/// Hour (24h) from which evening slots can no longer be booked for today.
pub const EVENING_CUTOFF_HOUR: u32 = 15;

/// Hour (24h) during which bookings for future dates are refused.
pub const FUTURE_DATE_CUTOFF_HOUR: u32 = 0;

pub const SLOTS_FILLED_MESSAGE: &str = "Slots are filled, book in the next shift";
pub const BOOKING_WINDOW_CLOSED_MESSAGE: &str = "Booking window closed, please try again later";
pub const TRIAL_EVENING_ONLY_MESSAGE: &str = "Trial meals for today are delivered in the evening shift only";

/// Why a slot cannot be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Restriction {
    /// Today's slot has ended, or today's evening cutoff has passed.
    SlotsFilled,
    /// Future bookings are paused for the current hour.
    BookingWindowClosed,
    /// A trial plan starting today asked for a morning slot.
    TrialEveningOnly,
    /// The candidate date is before today.
    DatePassed,
}

impl Restriction {
    /// Customer-facing text. `DatePassed` has none.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Restriction::SlotsFilled => Some(SLOTS_FILLED_MESSAGE),
            Restriction::BookingWindowClosed => Some(BOOKING_WINDOW_CLOSED_MESSAGE),
            Restriction::TrialEveningOnly => Some(TRIAL_EVENING_ONLY_MESSAGE),
            Restriction::DatePassed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub available: bool,
    pub restriction: Option<Restriction>,
    pub restriction_reason: Option<&'static str>,
}

impl Availability {
    fn from_restriction(restriction: Option<Restriction>) -> Self {
        Self {
            available: restriction.is_none(),
            restriction,
            restriction_reason: restriction.and_then(Restriction::message),
        }
    }
}

/// A catalog slot together with its evaluation, as rendered by a slot picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotAvailability {
    #[serde(flatten)]
    pub slot: TimeSlot,
    #[serde(flatten)]
    pub availability: Availability,
}

/// One evaluation's inputs.
#[derive(Debug, Clone, Copy)]
pub struct BookingRequest<'a> {
    pub now: NaiveDateTime,
    pub date: Option<NaiveDate>,
    pub slot: &'a str,
    /// Plan being booked, when known. Only trials change the outcome.
    pub plan_type: Option<PlanType>,
}

impl<'a> BookingRequest<'a> {
    pub fn new(now: NaiveDateTime, date: Option<NaiveDate>, slot: &'a str) -> Self {
        Self {
            now,
            date,
            slot,
            plan_type: None,
        }
    }

    pub fn with_plan(self, plan_type: PlanType) -> Self {
        Self {
            plan_type: Some(plan_type),
            ..self
        }
    }
}

/// The pair of cutoff hours the policy enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    pub evening_cutoff_hour: u32,
    pub future_date_cutoff_hour: u32,
}

impl Default for BookingWindow {
    fn default() -> Self {
        Self {
            evening_cutoff_hour: EVENING_CUTOFF_HOUR,
            future_date_cutoff_hour: FUTURE_DATE_CUTOFF_HOUR,
        }
    }
}

impl BookingWindow {
    /// Builds a window from explicit cutoff hours, each in `0..=23`.
    pub fn new(evening_cutoff_hour: u32, future_date_cutoff_hour: u32) -> SlotResult<Self> {
        for (name, hour) in [
            ("evening cutoff hour", evening_cutoff_hour),
            ("future date cutoff hour", future_date_cutoff_hour),
        ] {
            if hour > 23 {
                return Err(SlotError::Validation(format!(
                    "{} must be between 0 and 23, got {}",
                    name, hour
                )));
            }
        }

        Ok(Self {
            evening_cutoff_hour,
            future_date_cutoff_hour,
        })
    }

    pub fn can_book_evening_slot_today(&self, now: NaiveDateTime) -> bool {
        now.hour() < self.evening_cutoff_hour
    }

    pub fn can_book_future_date(&self, now: NaiveDateTime) -> bool {
        now.hour() != self.future_date_cutoff_hour
    }

    /// Returns the reason `request` cannot be booked, or `None` if it can.
    pub fn restriction(&self, request: &BookingRequest<'_>) -> Option<Restriction> {
        let date = request.date?;
        let now = request.now;

        match date.cmp(&now.date()) {
            Ordering::Equal => {
                let category = time_slot_category(request.slot);
                let evening_closed =
                    category == Some(SlotCategory::Evening) && !self.can_book_evening_slot_today(now);

                if has_slot_passed(now, request.slot) || evening_closed {
                    Some(Restriction::SlotsFilled)
                } else if request.plan_type == Some(PlanType::Trial)
                    && category != Some(SlotCategory::Evening)
                {
                    Some(Restriction::TrialEveningOnly)
                } else {
                    None
                }
            }
            Ordering::Greater if !self.can_book_future_date(now) => {
                Some(Restriction::BookingWindowClosed)
            }
            Ordering::Greater => None,
            Ordering::Less => Some(Restriction::DatePassed),
        }
    }

    pub fn is_slot_available(
        &self,
        now: NaiveDateTime,
        date: Option<NaiveDate>,
        slot: &str,
    ) -> bool {
        self.restriction(&BookingRequest::new(now, date, slot)).is_none()
    }

    pub fn restriction_message(
        &self,
        now: NaiveDateTime,
        date: Option<NaiveDate>,
        slot: &str,
    ) -> Option<&'static str> {
        self.restriction(&BookingRequest::new(now, date, slot))
            .and_then(Restriction::message)
    }

    pub fn evaluate(&self, now: NaiveDateTime, date: Option<NaiveDate>, slot: &str) -> Availability {
        Availability::from_restriction(self.restriction(&BookingRequest::new(now, date, slot)))
    }

    /// Evaluates the whole catalog for `date`, in catalog order. Passing a
    /// plan type applies its extra rules.
    pub fn slots_for(
        &self,
        now: NaiveDateTime,
        date: Option<NaiveDate>,
        plan_type: Option<PlanType>,
    ) -> Vec<SlotAvailability> {
        TIME_SLOTS
            .iter()
            .map(|slot| {
                let request = BookingRequest {
                    plan_type,
                    ..BookingRequest::new(now, date, slot.value)
                };
                SlotAvailability {
                    slot: *slot,
                    availability: Availability::from_restriction(self.restriction(&request)),
                }
            })
            .collect()
    }
}

/// True once the current time of day has reached the slot's end hour.
///
/// Slots outside the catalog fall back to the hours in their label; a label
/// that cannot be read never counts as passed.
pub fn has_slot_passed(now: NaiveDateTime, slot: &str) -> bool {
    let end_minutes = match TimeSlot::find(slot) {
        Some(known) => Some(known.end_minutes()),
        None => parse_slot_hours(slot).map(|(_, end)| end * 60),
    };

    let current_minutes = now.hour() * 60 + now.minute();
    end_minutes.is_some_and(|end| current_minutes >= end)
}

/// [`BookingWindow::is_slot_available`] with the default cutoffs.
pub fn is_slot_available(now: NaiveDateTime, date: Option<NaiveDate>, slot: &str) -> bool {
    BookingWindow::default().is_slot_available(now, date, slot)
}

/// [`BookingWindow::restriction_message`] with the default cutoffs.
pub fn slot_restriction_message(
    now: NaiveDateTime,
    date: Option<NaiveDate>,
    slot: &str,
) -> Option<&'static str> {
    BookingWindow::default().restriction_message(now, date, slot)
}
