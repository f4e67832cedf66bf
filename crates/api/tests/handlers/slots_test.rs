use axum::http::StatusCode;
use mealslot_core::policy::{
    BookingWindow, BOOKING_WINDOW_CLOSED_MESSAGE, SLOTS_FILLED_MESSAGE, TRIAL_EVENING_ONLY_MESSAGE,
};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::test_utils::{at, server_at, server_with, today};

fn availability(body: &Value) -> Vec<(String, bool)> {
    body["slots"]
        .as_array()
        .expect("slots should be an array")
        .iter()
        .map(|slot| {
            (
                slot["value"].as_str().unwrap().to_string(),
                slot["available"].as_bool().unwrap(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_list_slots_without_date() {
    let server = server_at(at(23, 30));

    let response = server.get("/api/slots").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["date"], Value::Null);
    assert_eq!(body["slots"].as_array().unwrap().len(), 7);
    assert!(availability(&body).iter().all(|(_, open)| *open));
}

#[tokio::test]
async fn test_list_slots_today_afternoon() {
    let server = server_at(at(14, 30));

    let response = server
        .get("/api/slots")
        .add_query_param("date", today().to_string())
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["date"], "2024-03-14");
    assert_eq!(body["evaluated_at"], "2024-03-14T14:30:00");
    assert_eq!(
        availability(&body),
        vec![
            ("6:00 AM - 7:00 AM".to_string(), false),
            ("7:00 AM - 8:00 AM".to_string(), false),
            ("8:00 AM - 9:00 AM".to_string(), false),
            ("9:00 AM - 10:00 AM".to_string(), false),
            ("6:00 PM - 7:00 PM".to_string(), true),
            ("7:00 PM - 8:00 PM".to_string(), true),
            ("8:00 PM - 9:00 PM".to_string(), true),
        ]
    );

    let first = &body["slots"][0];
    assert_eq!(first["category"], "Morning");
    assert_eq!(first["restriction"], "slots_filled");
    assert_eq!(first["restriction_reason"], SLOTS_FILLED_MESSAGE);

    let evening = &body["slots"][4];
    assert_eq!(evening["restriction"], Value::Null);
    assert_eq!(evening["restriction_reason"], Value::Null);
}

#[tokio::test]
async fn test_list_slots_today_after_evening_cutoff() {
    let server = server_at(at(15, 5));

    let response = server
        .get("/api/slots")
        .add_query_param("date", "2024-03-14")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(availability(&body).iter().all(|(_, open)| !*open));
    assert_eq!(body["slots"][4]["restriction_reason"], SLOTS_FILLED_MESSAGE);
}

#[tokio::test]
async fn test_list_slots_tomorrow_during_midnight_hour() {
    let server = server_at(at(0, 15));

    let response = server
        .get("/api/slots")
        .add_query_param("date", "2024-03-15")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    for slot in body["slots"].as_array().unwrap() {
        assert_eq!(slot["available"], false);
        assert_eq!(slot["restriction"], "booking_window_closed");
        assert_eq!(slot["restriction_reason"], BOOKING_WINDOW_CLOSED_MESSAGE);
    }
}

#[tokio::test]
async fn test_list_slots_past_date() {
    let server = server_at(at(10, 0));

    let response = server
        .get("/api/slots")
        .add_query_param("date", "2024-03-13")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    for slot in body["slots"].as_array().unwrap() {
        assert_eq!(slot["available"], false);
        assert_eq!(slot["restriction"], "date_passed");
        assert_eq!(slot["restriction_reason"], Value::Null);
    }
}

#[tokio::test]
async fn test_list_slots_uses_configured_window() {
    let server = server_with(at(16, 0), BookingWindow::new(17, 0).unwrap());

    let response = server
        .get("/api/slots")
        .add_query_param("date", "2024-03-14")
        .await;

    let body: Value = response.json();
    assert_eq!(body["slots"][4]["available"], true);
}

#[tokio::test]
async fn test_list_slots_invalid_date() {
    let server = server_at(at(10, 0));

    let response = server
        .get("/api/slots")
        .add_query_param("date", "14/03/2024")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Invalid date"));
}

#[tokio::test]
async fn test_list_slots_trial_today_offers_evenings_only() {
    let server = server_at(at(8, 0));

    let response = server
        .get("/api/slots")
        .add_query_param("date", "2024-03-14")
        .add_query_param("plan", "trial")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let open: Vec<String> = availability(&body)
        .into_iter()
        .filter(|(_, open)| *open)
        .map(|(value, _)| value)
        .collect();
    assert_eq!(
        open,
        vec!["6:00 PM - 7:00 PM", "7:00 PM - 8:00 PM", "8:00 PM - 9:00 PM"]
    );
    assert_eq!(body["slots"][3]["restriction"], "trial_evening_only");
    assert_eq!(body["slots"][3]["restriction_reason"], TRIAL_EVENING_ONLY_MESSAGE);
}

#[tokio::test]
async fn test_list_slots_trial_tomorrow_offers_mornings() {
    let server = server_at(at(8, 0));

    let response = server
        .get("/api/slots")
        .add_query_param("date", "2024-03-15")
        .add_query_param("plan", "trial")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(availability(&body).iter().all(|(_, open)| *open));
}

#[tokio::test]
async fn test_list_slots_unknown_plan() {
    let server = server_at(at(8, 0));

    let response = server
        .get("/api/slots")
        .add_query_param("plan", "monthly")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Unknown plan type"));
}

#[tokio::test]
async fn test_slot_category_lookup() {
    let server = server_at(at(10, 0));

    let response = server
        .get("/api/slots/category")
        .add_query_param("slot", "7:00 PM - 8:00 PM")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["slot"], "7:00 PM - 8:00 PM");
    assert_eq!(body["category"], "Evening");
}

#[tokio::test]
async fn test_slot_category_unknown_value() {
    let server = server_at(at(10, 0));

    let response = server
        .get("/api/slots/category")
        .add_query_param("slot", "noon")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["category"], Value::Null);
}
