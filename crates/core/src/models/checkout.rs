use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::plan::{PlanInfo, PlanType};
use super::time_slot::SlotCategory;

/// Areas the kitchen delivers to.
pub const DELIVERY_LOCATIONS: [&str; 13] = [
    "Brookefield - Whitefield",
    "Munnekollal - Marathahalli",
    "Kadubeesanahalli - Marathahalli",
    "Hoodi - Marathahalli",
    "ITPL- Whitefield",
    "Doddenakundi - Marathahalli",
    "Panathur - Marathahalli",
    "Garudachar Palya - Marathahalli",
    "Kundalahalli - Whitefield",
    "Varthur - Whitefield",
    "Hope Farm Junction - Whitefield",
    "Siddapura - Whitefield",
    "Madhevpura",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cod,
    Upi,
}

/// The checkout form as submitted by the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub plan: PlanInfo,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone_number: String,
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub preferred_shift: String,
    #[serde(default)]
    pub nearby_location: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
}

/// A checkout that passed validation, with whitespace trimmed and prices resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub plan: String,
    pub plan_type: PlanType,
    pub juice_pack: bool,
    pub selected_juices: Vec<String>,
    pub total_price: u32,
    pub customer_name: String,
    pub phone_number: String,
    pub start_date: NaiveDate,
    pub preferred_shift: String,
    pub slot_category: SlotCategory,
    pub nearby_location: String,
    pub address: String,
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
}
