pub mod confirmations;
pub mod customers;
pub mod dashboard;
pub mod inventory;
pub mod session;
