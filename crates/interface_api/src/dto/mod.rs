//! Request/response data transfer objects

pub mod catalog;
pub mod quote;
