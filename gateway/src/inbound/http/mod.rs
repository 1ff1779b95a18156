//! HTTP inbound adapter exposing the REST surface.

pub mod cities;
mod encode;
pub mod error;
pub mod health;
pub mod places;
mod query;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{ApiError, ApiResult};
