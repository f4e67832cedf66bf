use mealslot_api::routes::health::{HealthResponse, VersionResponse};
use mealslot_core::policy::BookingWindow;
use pretty_assertions::assert_eq;

use crate::test_utils::{at, server_at, server_with};

#[tokio::test]
async fn test_health_check() {
    let server = server_at(at(9, 45));

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: HealthResponse = response.json();
    assert_eq!(body.status, "ok");
    assert_eq!(body.server_time, at(9, 45));
    assert_eq!(body.booking_window, BookingWindow::default());
}

#[tokio::test]
async fn test_health_reports_configured_window() {
    let window = BookingWindow::new(16, 1).unwrap();
    let server = server_with(at(9, 45), window);

    let body: HealthResponse = server.get("/health").await.json();
    assert_eq!(body.booking_window, window);
}

#[tokio::test]
async fn test_version() {
    let server = server_at(at(9, 45));

    let body: VersionResponse = server.get("/version").await.json();
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}
