use std::sync::Arc;

use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use mealslot_api::{build_router, ApiState};
use mealslot_core::clock::FixedClock;
use mealslot_core::policy::BookingWindow;

/// The date every test treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
}

pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    today().and_hms_opt(hour, minute, 0).unwrap()
}

pub fn build_state(now: NaiveDateTime, booking_window: BookingWindow) -> Arc<ApiState> {
    Arc::new(ApiState {
        clock: Arc::new(FixedClock(now)),
        booking_window,
    })
}

/// A test server whose clock is frozen at `now`, with the default cutoffs.
pub fn server_at(now: NaiveDateTime) -> TestServer {
    server_with(now, BookingWindow::default())
}

pub fn server_with(now: NaiveDateTime, booking_window: BookingWindow) -> TestServer {
    TestServer::new(build_router(build_state(now, booking_window)))
        .expect("Failed to start test server")
}
