//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the MealSlot API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `BOOKING_TIMEZONE`: IANA timezone the cutoffs are measured in (default: "Asia/Kolkata")
//! - `EVENING_CUTOFF_HOUR`: Hour after which today's evening slots close (default: 15)
//! - `FUTURE_DATE_CUTOFF_HOUR`: Hour during which future bookings are refused (default: 0)

use std::env;

use chrono_tz::Tz;
use eyre::{eyre, Result, WrapErr};
use mealslot_core::clock::{SystemClock, DEFAULT_TIMEZONE};
use mealslot_core::policy::{BookingWindow, EVENING_CUTOFF_HOUR, FUTURE_DATE_CUTOFF_HOUR};
use tracing::Level;

/// Configuration for the MealSlot API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use mealslot_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Timezone in which "today" and the cutoff hours are evaluated
    pub timezone: Tz,

    /// Cutoff hours enforced by the slot policy
    pub booking_window: BookingWindow,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            timezone: chrono_tz::Asia::Kolkata,
            booking_window: BookingWindow::default(),
        }
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - BOOKING_TIMEZONE is not a known IANA timezone
    /// - A cutoff hour is not an integer between 0 and 23
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Booking policy settings
        let timezone_name = env::var("BOOKING_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
        let timezone = SystemClock::from_name(&timezone_name)
            .map_err(|e| eyre!("Invalid BOOKING_TIMEZONE value: {}", e))?
            .timezone();

        let evening_cutoff_hour = hour_from_env("EVENING_CUTOFF_HOUR", EVENING_CUTOFF_HOUR)?;
        let future_date_cutoff_hour = hour_from_env("FUTURE_DATE_CUTOFF_HOUR", FUTURE_DATE_CUTOFF_HOUR)?;
        let booking_window = BookingWindow::new(evening_cutoff_hour, future_date_cutoff_hour)
            .map_err(|e| eyre!("Invalid booking window: {}", e))?;

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            timezone,
            booking_window,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn parse_log_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn hour_from_env(name: &str, default: u32) -> Result<u32> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {} value", name)),
        Err(_) => Ok(default),
    }
}
