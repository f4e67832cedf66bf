pub mod checkout;
pub mod slots;
