use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Subscription,
    Trial,
}

/// The plan a customer is checking out, as chosen on the plans page.
///
/// Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanInfo {
    pub name: String,
    pub price: u32,
    pub juice_price: u32,
    pub juice_added: bool,
    #[serde(default)]
    pub selected_juices: Vec<String>,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub has_egg: bool,
}

impl PlanInfo {
    /// Plan price plus the juice pack when added. `None` if the sum overflows.
    pub fn total_price(&self) -> Option<u32> {
        if self.juice_added {
            self.price.checked_add(self.juice_price)
        } else {
            Some(self.price)
        }
    }

    /// Display name with the meal type, e.g. `"Pro Weekly Plan (Egg)"`.
    pub fn label(&self) -> String {
        let meal = if self.has_egg { "Egg" } else { "Veg" };
        format!("{} ({})", self.name, meal)
    }
}
