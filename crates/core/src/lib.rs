//! # MealSlot Core
//!
//! Domain types and rules for booking meal deliveries:
//!
//! - **models**: the fixed slot catalog, plans and the checkout form
//! - **policy**: which (date, slot) pairs can be booked right now, and why not
//! - **checkout**: submission-time validation that re-applies the policy
//! - **clock**: where "now" comes from
//! - **errors**: the crate's error type

pub mod checkout;
pub mod clock;
pub mod errors;
pub mod models;
pub mod policy;
