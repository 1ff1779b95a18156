//! Outbound adapters.

pub mod store;
