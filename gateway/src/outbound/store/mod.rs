//! Store-service outbound adapter.
//!
//! Thin HTTP implementation of the `PlaceStore` port.

mod dto;
mod http_client;

pub use http_client::StoreHttpClient;
