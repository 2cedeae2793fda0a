//! Shared application state provided via context at the application root.

pub mod notify;
pub mod session;
