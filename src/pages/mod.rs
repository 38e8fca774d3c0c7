pub mod admin;
pub mod dashboard;
pub mod inventory;
pub mod issues;
pub mod login;
pub mod not_found;
pub mod payment;
pub mod purchase;
pub mod sales;
