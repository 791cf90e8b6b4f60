//! Request guards and session helpers.

pub mod auth;
pub mod session;
