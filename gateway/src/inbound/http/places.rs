//! Place endpoints.
//!
//! ```text
//! POST /place {"title":"...","address":"...","description":"..."}
//! GET /places?offset=<uint>&amount=<uint>[&city_id=<uint>]
//! ```

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{NewPlace, Place};

use super::encode::json_response;
use super::error::{ApiError, ApiResult};
use super::query::decode_list_query;
use super::state::HttpState;

/// Create request body for `POST /place`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreatePlaceRequest {
    pub title: String,
    pub address: String,
    pub description: String,
}

/// Wire shape of one place in list responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlaceResponse {
    pub id: u64,
    pub title: String,
    pub address: String,
    pub description: String,
    /// Empty string when the store holds no image, never omitted.
    pub image_url: String,
}

impl From<Place> for PlaceResponse {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            title: place.title,
            address: place.address,
            description: place.description,
            image_url: place.image_url,
        }
    }
}

/// Response envelope for `GET /places`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlacesResponse {
    pub places: Vec<PlaceResponse>,
}

/// Create a place in the store service.
///
/// Returns 200 with an empty body; the assigned identifier is logged, not
/// returned.
#[utoipa::path(
    post,
    path = "/place",
    request_body = CreatePlaceRequest,
    responses(
        (status = 200, description = "Place created"),
        (status = 400, description = "Malformed body or rejected field"),
        (status = 502, description = "Store service unreachable"),
        (status = 500, description = "Store service failed")
    ),
    tags = ["places"],
    operation_id = "createPlace"
)]
#[post("/place")]
pub async fn create_place(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    handle_create_place(state.get_ref(), &body)
        .await
        .map_err(|err| err.logged("/place"))
}

async fn handle_create_place(state: &HttpState, body: &[u8]) -> ApiResult<HttpResponse> {
    let request: CreatePlaceRequest =
        serde_json::from_slice(body).map_err(ApiError::decode)?;
    if state.reject_blank_title && request.title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be blank".to_owned()));
    }

    let id = state
        .store
        .add_place(NewPlace {
            title: request.title,
            address: request.address,
            description: request.description,
        })
        .await?;
    info!(place_id = id, "place created");
    Ok(HttpResponse::Ok().finish())
}

/// List places, optionally filtered to one city.
///
/// Order and count mirror the store response exactly; nothing is re-sorted
/// or dropped.
#[utoipa::path(
    get,
    path = "/places",
    params(
        ("offset" = Option<u64>, Query, description = "Entities to skip, defaults to 0"),
        ("amount" = u64, Query, description = "Maximum entities to return, must be positive"),
        ("city_id" = Option<u64>, Query, description = "Restrict to one city")
    ),
    responses(
        (status = 200, description = "Places in store order", body = PlacesResponse),
        (status = 400, description = "Undecodable query"),
        (status = 416, description = "Empty pagination window"),
        (status = 502, description = "Store service unreachable"),
        (status = 500, description = "Store service failed")
    ),
    tags = ["places"],
    operation_id = "listPlaces"
)]
#[get("/places")]
pub async fn get_places(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    handle_list_places(state.get_ref(), request.query_string())
        .await
        .map_err(|err| err.logged("/places"))
}

async fn handle_list_places(state: &HttpState, query_string: &str) -> ApiResult<HttpResponse> {
    let query = decode_list_query(query_string)?;
    let places = match query.city_id {
        Some(city_id) => state.store.get_places_by_city(city_id, query.page).await,
        None => state.store.get_places(query.page).await,
    }?;

    let response = PlacesResponse {
        places: places.into_iter().map(PlaceResponse::from).collect(),
    };
    json_response(&response)
}
