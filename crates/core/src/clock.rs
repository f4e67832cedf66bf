use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::errors::{SlotError, SlotResult};

/// Default business timezone of the storefront.
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// Source of the current wall-clock time, in the business timezone.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads system time and converts it to a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Builds a clock from an IANA timezone name such as `"Asia/Kolkata"`.
    pub fn from_name(name: &str) -> SlotResult<Self> {
        let timezone: Tz = name
            .parse()
            .map_err(|_| SlotError::Validation(format!("Unknown timezone: {}", name)))?;
        Ok(Self::new(timezone))
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Kolkata)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
