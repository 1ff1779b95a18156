//! Core entities served by the gateway.
//!
//! These types are transport agnostic: the HTTP adapter maps them onto wire
//! DTOs and the outbound adapter maps store payloads into them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A place as held by the store service.
///
/// Identifiers are assigned by the store; the gateway never mutates places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: u64,
    pub title: String,
    pub address: String,
    pub description: String,
    /// Empty when the store holds no image for this place.
    #[serde(default)]
    pub image_url: String,
}

/// A city known to the store service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: u64,
    pub title: String,
}

/// Fields accepted when creating a place; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlace {
    pub title: String,
    pub address: String,
    pub description: String,
}

/// Validated pagination window for list calls.
///
/// ## Invariants
/// - `amount` is strictly positive; a zero window is rejected at
///   construction so it can never reach the store client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: u64,
    amount: u64,
}

/// Validation errors raised when constructing a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageValidationError {
    /// The requested window is empty.
    #[error("amount must be greater than zero")]
    ZeroAmount,
}

impl Page {
    /// Construct a window, rejecting an empty `amount`.
    ///
    /// # Examples
    /// ```
    /// use gateway::domain::Page;
    ///
    /// let page = Page::new(0, 20).expect("non-empty window");
    /// assert_eq!(page.amount(), 20);
    /// assert!(Page::new(0, 0).is_err());
    /// ```
    pub fn new(offset: u64, amount: u64) -> Result<Self, PageValidationError> {
        if amount == 0 {
            return Err(PageValidationError::ZeroAmount);
        }
        Ok(Self { offset, amount })
    }

    /// Number of entities to skip.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum number of entities to return; always positive.
    pub fn amount(&self) -> u64 {
        self.amount
    }
}

/// Typed list-call arguments decoded from one request.
///
/// Never persisted; built fresh from the query string for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Page,
    /// When present, list calls are filtered to this city.
    pub city_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(100, 20)]
    #[case(u64::MAX, u64::MAX)]
    fn page_accepts_positive_amounts(#[case] offset: u64, #[case] amount: u64) {
        let page = Page::new(offset, amount).expect("window is non-empty");
        assert_eq!(page.offset(), offset);
        assert_eq!(page.amount(), amount);
    }

    #[test]
    fn page_rejects_zero_amount() {
        assert_eq!(Page::new(5, 0), Err(PageValidationError::ZeroAmount));
    }

    #[test]
    fn place_decodes_without_image_url() {
        let place: Place = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "cafe",
            "address": "street 1",
            "description": "quiet"
        }))
        .expect("place decodes");
        assert_eq!(place.image_url, "");
    }
}
