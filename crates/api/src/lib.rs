//! # MealSlot API
//!
//! The API crate provides the web server that exposes the delivery slot policy
//! to the storefront.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Evaluate the slot policy and checkout rules per request
//! - **Middleware**: Error mapping shared by all handlers
//! - **Config**: Environment-driven settings, including the booking window
//!
//! The API uses Axum as the web framework. It holds no database: every
//! response is computed from the clock and the configured cutoffs.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::{Result, WrapErr};
use mealslot_core::clock::{Clock, SystemClock};
use mealslot_core::policy::BookingWindow;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use mealslot_api::ApiState;
/// use mealslot_core::clock::SystemClock;
/// use mealslot_core::policy::BookingWindow;
///
/// let state = Arc::new(ApiState {
///     clock: Arc::new(SystemClock::default()),
///     booking_window: BookingWindow::default(),
/// });
/// let app = mealslot_api::build_router(state);
/// ```
pub struct ApiState {
    /// Source of "now" in the business timezone
    pub clock: Arc<dyn Clock>,

    /// Cutoff hours enforced by the slot policy
    pub booking_window: BookingWindow,
}

/// Builds the application router with all routes attached to `state`
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot catalog and availability endpoints
        .merge(routes::slots::routes())
        // Checkout validation endpoints
        .merge(routes::checkout::routes())
        // Attach shared state to all routes
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration
///
/// Initializes logging, builds the router with a system clock in the
/// configured timezone, and serves HTTP until the process stops.
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState {
        clock: Arc::new(SystemClock::new(config.timezone)),
        booking_window: config.booking_window,
    });

    info!(
        "Booking window: evening cutoff {}:00, future date cutoff {}:00 ({})",
        config.booking_window.evening_cutoff_hour,
        config.booking_window.future_date_cutoff_hour,
        config.timezone
    );

    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<Vec<axum::http::HeaderValue>, _>>()
            .wrap_err("Invalid API_CORS_ORIGINS value")?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(config.request_timeout),
            ))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
