//! REST gateway for the places store service.
//!
//! Decodes inbound HTTP requests into validated store calls, invokes the
//! store through the [`domain::PlaceStore`] port, and maps every outcome
//! onto a defined HTTP response.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
