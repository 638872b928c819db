//! Core library components.

pub mod constants;
pub mod credentials;
pub mod properties;
pub mod resolve;
pub mod session;
pub mod store;
