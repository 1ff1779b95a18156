//! Transport-agnostic types and the store-client port.

pub mod places;
pub mod ports;

pub use places::{City, ListQuery, NewPlace, Page, PageValidationError, Place};
pub use ports::{FixturePlaceStore, PlaceStore, StoreError};
