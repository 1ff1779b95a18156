//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! the store port and stay testable with an in-memory implementation.

use std::sync::Arc;

use crate::domain::PlaceStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Long-lived store-client handle, shared by every in-flight request.
    pub store: Arc<dyn PlaceStore>,
    /// When set, a blank or whitespace-only `title` on create is rejected
    /// with 400 instead of being forwarded to the store.
    pub reject_blank_title: bool,
}

impl HttpState {
    /// Bundle a store handle with the default create policy.
    pub fn new(store: Arc<dyn PlaceStore>) -> Self {
        Self {
            store,
            reject_blank_title: false,
        }
    }

    /// Enable or disable the blank-title rejection policy.
    #[must_use]
    pub fn with_reject_blank_title(mut self, reject: bool) -> Self {
        self.reject_blank_title = reject;
        self
    }
}
