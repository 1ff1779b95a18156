//! DTOs for the store service's JSON wire format.
//!
//! The adapter decodes into these transport DTOs first, then maps into
//! domain entities in one pass.

use serde::{Deserialize, Serialize};

use crate::domain::{City, Place};

#[derive(Debug, Serialize)]
pub(super) struct AddPlaceRequestDto<'a> {
    pub(super) title: &'a str,
    pub(super) address: &'a str,
    pub(super) description: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct AddPlaceResponseDto {
    pub(super) id: u64,
}

#[derive(Debug, Deserialize)]
pub(super) struct PlaceDto {
    pub(super) id: u64,
    pub(super) title: String,
    pub(super) address: String,
    pub(super) description: String,
    #[serde(default)]
    pub(super) image_url: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct PlacesResponseDto {
    #[serde(default)]
    pub(super) places: Vec<PlaceDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CityDto {
    pub(super) id: u64,
    pub(super) title: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct CitiesResponseDto {
    #[serde(default)]
    pub(super) cities: Vec<CityDto>,
}

impl PlacesResponseDto {
    pub(super) fn into_domain(self) -> Vec<Place> {
        self.places.into_iter().map(PlaceDto::into_domain).collect()
    }
}

impl PlaceDto {
    fn into_domain(self) -> Place {
        Place {
            id: self.id,
            title: self.title,
            address: self.address,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

impl CitiesResponseDto {
    pub(super) fn into_domain(self) -> Vec<City> {
        self.cities
            .into_iter()
            .map(|city| City {
                id: city.id,
                title: city.title,
            })
            .collect()
    }
}
