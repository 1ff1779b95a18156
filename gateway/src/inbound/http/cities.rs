//! City endpoints.
//!
//! ```text
//! GET /cities?offset=<uint>&amount=<uint>
//! ```

use actix_web::{get, web, HttpRequest, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::City;

use super::encode::json_response;
use super::error::ApiResult;
use super::query::decode_list_query;
use super::state::HttpState;

/// Wire shape of one city in list responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct CityResponse {
    pub id: u64,
    pub title: String,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            title: city.title,
        }
    }
}

/// Response envelope for `GET /cities`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CitiesResponse {
    pub cities: Vec<CityResponse>,
}

/// List cities in store order.
#[utoipa::path(
    get,
    path = "/cities",
    params(
        ("offset" = Option<u64>, Query, description = "Entities to skip, defaults to 0"),
        ("amount" = u64, Query, description = "Maximum entities to return, must be positive")
    ),
    responses(
        (status = 200, description = "Cities in store order", body = CitiesResponse),
        (status = 400, description = "Undecodable query"),
        (status = 416, description = "Empty pagination window"),
        (status = 502, description = "Store service unreachable"),
        (status = 500, description = "Store service failed")
    ),
    tags = ["cities"],
    operation_id = "listCities"
)]
#[get("/cities")]
pub async fn get_cities(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    handle_list_cities(state.get_ref(), request.query_string())
        .await
        .map_err(|err| err.logged("/cities"))
}

async fn handle_list_cities(state: &HttpState, query_string: &str) -> ApiResult<HttpResponse> {
    let query = decode_list_query(query_string)?;
    let cities = state.store.get_cities(query.page).await?;

    let response = CitiesResponse {
        cities: cities.into_iter().map(CityResponse::from).collect(),
    };
    json_response(&response)
}
