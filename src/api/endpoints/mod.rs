pub mod analyze;
pub mod drugs;
pub mod health;
