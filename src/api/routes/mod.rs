pub mod admin;
pub mod automations;
pub mod health;
pub mod payments;
pub mod sheets;
