pub mod checkout;
pub mod plan;
pub mod time_slot;
