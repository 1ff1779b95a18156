//! The store-client port and its error classes.
//!
//! The gateway talks to the store service only through [`PlaceStore`], so the
//! HTTP adapter can be exercised against an in-memory implementation without
//! touching routing logic. Adapters map their failures into [`StoreError`]
//! variants instead of leaking transport types.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use super::places::{City, NewPlace, Page, Place};

/// Failures surfaced by store-client adapters.
///
/// The gateway classifies outcomes only; it never retries (retry policy is
/// the caller's responsibility).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached: connection refused, timeout, broken
    /// transport.
    #[error("store service is unreachable: {message}")]
    Transport { message: String },
    /// The store received a well-formed call and reported a failure.
    #[error("store service failed: {message}")]
    Backend { message: String },
}

impl StoreError {
    /// Helper for transport-level failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for store-reported failures.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Typed call contract against the remote store service.
///
/// Implementations must be safe for concurrent invocation; one handle is
/// shared by every in-flight request. Dropping a call future cancels the
/// pending operation, which is how client disconnects propagate.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Create a place and return the identifier the store assigned.
    async fn add_place(&self, place: NewPlace) -> Result<u64, StoreError>;

    /// List places in insertion order.
    async fn get_places(&self, page: Page) -> Result<Vec<Place>, StoreError>;

    /// List places belonging to one city, in insertion order.
    async fn get_places_by_city(&self, city_id: u64, page: Page)
        -> Result<Vec<Place>, StoreError>;

    /// List known cities.
    async fn get_cities(&self, page: Page) -> Result<Vec<City>, StoreError>;
}

/// In-memory [`PlaceStore`] used by tests and as the fallback when no store
/// endpoint is configured.
///
/// Preserves insertion order and assigns identifiers from 1 upward, matching
/// the store service's observable behaviour.
pub struct FixturePlaceStore {
    places: Mutex<Vec<FixturePlace>>,
    cities: Vec<City>,
    next_id: AtomicU64,
}

struct FixturePlace {
    city_id: Option<u64>,
    place: Place,
}

impl Default for FixturePlaceStore {
    fn default() -> Self {
        Self {
            places: Mutex::new(Vec::new()),
            cities: Vec::new(),
            next_id: AtomicU64::new(1),
        }
    }
}

impl FixturePlaceStore {
    /// Empty store with no cities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with cities.
    pub fn with_cities(cities: Vec<City>) -> Self {
        Self {
            cities,
            ..Self::default()
        }
    }

    /// Seed a place attached to a city, returning its assigned identifier.
    pub fn seed_place(&self, city_id: Option<u64>, place: NewPlace) -> u64 {
        self.insert(city_id, place)
    }

    fn insert(&self, city_id: Option<u64>, place: NewPlace) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut places = self.places.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        places.push(FixturePlace {
            city_id,
            place: Place {
                id,
                title: place.title,
                address: place.address,
                description: place.description,
                image_url: String::new(),
            },
        });
        id
    }

    fn window<T: Clone>(items: &[T], page: Page) -> Vec<T> {
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let amount = usize::try_from(page.amount()).unwrap_or(usize::MAX);
        items.iter().skip(offset).take(amount).cloned().collect()
    }
}

#[async_trait]
impl PlaceStore for FixturePlaceStore {
    async fn add_place(&self, place: NewPlace) -> Result<u64, StoreError> {
        Ok(self.insert(None, place))
    }

    async fn get_places(&self, page: Page) -> Result<Vec<Place>, StoreError> {
        let places = self.places.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let all: Vec<Place> = places.iter().map(|entry| entry.place.clone()).collect();
        Ok(Self::window(&all, page))
    }

    async fn get_places_by_city(
        &self,
        city_id: u64,
        page: Page,
    ) -> Result<Vec<Place>, StoreError> {
        let places = self.places.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let matching: Vec<Place> = places
            .iter()
            .filter(|entry| entry.city_id == Some(city_id))
            .map(|entry| entry.place.clone())
            .collect();
        Ok(Self::window(&matching, page))
    }

    async fn get_cities(&self, page: Page) -> Result<Vec<City>, StoreError> {
        Ok(Self::window(&self.cities, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_place(title: &str) -> NewPlace {
        NewPlace {
            title: title.to_owned(),
            address: format!("{title} street"),
            description: String::new(),
        }
    }

    fn page(offset: u64, amount: u64) -> Page {
        Page::new(offset, amount).expect("valid window")
    }

    #[actix_web::test]
    async fn assigns_identifiers_in_insertion_order() {
        let store = FixturePlaceStore::new();
        let first = store.add_place(new_place("first")).await.expect("add succeeds");
        let second = store.add_place(new_place("second")).await.expect("add succeeds");
        assert_eq!((first, second), (1, 2));

        let places = store.get_places(page(0, 10)).await.expect("list succeeds");
        let titles: Vec<&str> = places.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[actix_web::test]
    async fn windows_respect_offset_and_amount() {
        let store = FixturePlaceStore::new();
        for i in 0..5 {
            store.seed_place(None, new_place(&format!("p{i}")));
        }

        let window = store.get_places(page(1, 2)).await.expect("list succeeds");
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].id, 2);
        assert_eq!(window[1].id, 3);

        let past_end = store.get_places(page(10, 2)).await.expect("list succeeds");
        assert!(past_end.is_empty());
    }

    #[actix_web::test]
    async fn filters_by_city() {
        let store = FixturePlaceStore::new();
        store.seed_place(Some(1), new_place("in-city"));
        store.seed_place(Some(2), new_place("elsewhere"));
        store.seed_place(Some(1), new_place("also-in-city"));

        let places = store
            .get_places_by_city(1, page(0, 10))
            .await
            .expect("list succeeds");
        let titles: Vec<&str> = places.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["in-city", "also-in-city"]);
    }

    #[actix_web::test]
    async fn lists_seeded_cities() {
        let store = FixturePlaceStore::with_cities(vec![
            City { id: 1, title: "Tomsk".to_owned() },
            City { id: 2, title: "Novosibirsk".to_owned() },
        ]);

        let cities = store.get_cities(page(0, 10)).await.expect("list succeeds");
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].title, "Tomsk");
    }
}
