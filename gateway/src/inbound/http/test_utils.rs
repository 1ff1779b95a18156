//! Test doubles for HTTP handler tests.
//!
//! [`StubStore`] plays the role of the remote store client: canned results
//! per operation plus call recording, so tests can assert both the mapped
//! status code and whether the store was reached at all.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;

use crate::domain::{City, NewPlace, Page, Place, PlaceStore, StoreError};

use super::state::HttpState;

/// Programmable [`PlaceStore`] double.
pub(crate) struct StubStore {
    add_result: Result<u64, StoreError>,
    places_result: Result<Vec<Place>, StoreError>,
    cities_result: Result<Vec<City>, StoreError>,
    add_calls: AtomicUsize,
    places_calls: AtomicUsize,
    cities_calls: AtomicUsize,
    by_city_calls: Mutex<Vec<u64>>,
}

impl StubStore {
    pub(crate) fn new() -> Self {
        Self {
            add_result: Ok(1),
            places_result: Ok(Vec::new()),
            cities_result: Ok(Vec::new()),
            add_calls: AtomicUsize::new(0),
            places_calls: AtomicUsize::new(0),
            cities_calls: AtomicUsize::new(0),
            by_city_calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_add_result(mut self, result: Result<u64, StoreError>) -> Self {
        self.add_result = result;
        self
    }

    pub(crate) fn with_places(self, places: Vec<Place>) -> Self {
        self.with_places_result(Ok(places))
    }

    pub(crate) fn with_places_result(mut self, result: Result<Vec<Place>, StoreError>) -> Self {
        self.places_result = result;
        self
    }

    pub(crate) fn with_cities(self, cities: Vec<City>) -> Self {
        self.with_cities_result(Ok(cities))
    }

    pub(crate) fn with_cities_result(mut self, result: Result<Vec<City>, StoreError>) -> Self {
        self.cities_result = result;
        self
    }

    pub(crate) fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn places_calls(&self) -> usize {
        self.places_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn cities_calls(&self) -> usize {
        self.cities_calls.load(Ordering::SeqCst)
    }

    /// City identifiers passed to `get_places_by_city`, in call order.
    pub(crate) fn by_city_calls(&self) -> Vec<u64> {
        self.by_city_calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl PlaceStore for StubStore {
    async fn add_place(&self, _place: NewPlace) -> Result<u64, StoreError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        self.add_result.clone()
    }

    async fn get_places(&self, _page: Page) -> Result<Vec<Place>, StoreError> {
        self.places_calls.fetch_add(1, Ordering::SeqCst);
        self.places_result.clone()
    }

    async fn get_places_by_city(
        &self,
        city_id: u64,
        _page: Page,
    ) -> Result<Vec<Place>, StoreError> {
        self.by_city_calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(city_id);
        self.places_result.clone()
    }

    async fn get_cities(&self, _page: Page) -> Result<Vec<City>, StoreError> {
        self.cities_calls.fetch_add(1, Ordering::SeqCst);
        self.cities_result.clone()
    }
}

/// Handler state backed by a stub store with the default create policy.
pub(crate) fn test_state(stub: Arc<StubStore>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(stub))
}

/// Handler state with the blank-title rejection policy enabled.
pub(crate) fn test_state_rejecting_blank_titles(stub: Arc<StubStore>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(stub).with_reject_blank_title(true))
}
