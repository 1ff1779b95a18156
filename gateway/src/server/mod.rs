//! Server construction and route wiring.

mod config;

pub use config::{ApiServerConfig, ConfigError, GatewayConfig, StoreServiceConfig};

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::{info, warn};
use url::Url;

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::{FixturePlaceStore, PlaceStore};
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::cities::get_cities;
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::places::{create_place, get_places};
use crate::inbound::http::state::HttpState;
use crate::middleware::Cors;
use crate::outbound::store::StoreHttpClient;

/// Build the store handle: the HTTP adapter when an endpoint is configured,
/// the in-memory fixture otherwise.
fn build_store(config: &StoreServiceConfig) -> std::io::Result<Arc<dyn PlaceStore>> {
    match &config.url {
        Some(raw) => {
            let url = Url::parse(raw)
                .map_err(|err| std::io::Error::other(format!("invalid store_service.url: {err}")))?;
            let client = StoreHttpClient::new(url, Duration::from_secs(config.timeout_seconds))
                .map_err(|err| {
                    std::io::Error::other(format!("store client construction failed: {err}"))
                })?;
            info!(url = raw, "using remote store service");
            Ok(Arc::new(client))
        }
        None => {
            warn!("no store_service.url configured; serving from the in-memory fixture store");
            Ok(Arc::new(FixturePlaceStore::new()))
        }
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    allowed_origins: String,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        allowed_origins,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Cors::new(allowed_origins))
        .service(create_place)
        .service(get_places)
        .service(get_cities)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server from loaded configuration.
///
/// Marks `health_state` ready once the listener is bound; the returned
/// [`Server`] must be awaited to drive it.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when the store handle cannot be built or
/// the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: &GatewayConfig,
) -> std::io::Result<Server> {
    let store = build_store(&config.store_service)?;
    let http_state = web::Data::new(
        HttpState::new(store).with_reject_blank_title(config.api_server.reject_blank_title),
    );
    let allowed_origins = config.api_server.allowed_origins.clone();
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            allowed_origins: allowed_origins.clone(),
        })
    })
    .bind(config.api_server.hostname.as_str())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
