//! Small helpers shared by services and controllers.

pub mod csv;
pub mod file;
pub mod parse;
pub mod password;
pub mod request;
pub mod sanitize;
