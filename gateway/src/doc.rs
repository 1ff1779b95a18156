//! OpenAPI documentation configuration.
//!
//! Registers the gateway's REST paths and response schemas. The generated
//! specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::cities::{CitiesResponse, CityResponse};
use crate::inbound::http::places::{CreatePlaceRequest, PlaceResponse, PlacesResponse};

/// OpenAPI document for the gateway API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Places gateway API",
        description = "REST surface translating place and city requests into store-service calls."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::places::create_place,
        crate::inbound::http::places::get_places,
        crate::inbound::http::cities::get_cities,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreatePlaceRequest,
        PlaceResponse,
        PlacesResponse,
        CityResponse,
        CitiesResponse
    )),
    tags(
        (name = "places", description = "Place creation and listing"),
        (name = "cities", description = "City listing"),
        (name = "health", description = "Probe endpoints")
    )
)]
pub struct ApiDoc;
