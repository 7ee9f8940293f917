//! Request handlers

pub mod health;
pub mod catalog;
pub mod quotes;
