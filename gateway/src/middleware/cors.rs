//! CORS decoration applied to every route.
//!
//! Attaches a fixed set of permissive headers to each response, with the
//! allowed origin taken from configuration. The decoration is stateless and
//! independent of the handler pipeline, so it also applies to error
//! responses.

use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::Error;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::error;

const ALLOW_HEADERS: &str = "Content-Type, Origin";
const ALLOW_METHODS: &str = "POST, GET";

/// Middleware factory carrying the configured allowed origin.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use gateway::middleware::Cors;
///
/// let app = App::new().wrap(Cors::new("*"));
/// ```
#[derive(Clone)]
pub struct Cors {
    allowed_origins: Rc<String>,
}

impl Cors {
    /// Build the decoration for one allowed origin value.
    pub fn new(allowed_origins: impl Into<String>) -> Self {
        Self {
            allowed_origins: Rc::new(allowed_origins.into()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsMiddleware {
            service,
            allowed_origins: self.allowed_origins.clone(),
        }))
    }
}

/// Service wrapper produced by [`Cors`]; not used directly.
pub struct CorsMiddleware<S> {
    service: S,
    allowed_origins: Rc<String>,
}

impl<S, B> Service<ServiceRequest> for CorsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let allowed_origins = self.allowed_origins.clone();
        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            let headers = res.response_mut().headers_mut();
            headers.insert(
                HeaderName::from_static("access-control-allow-headers"),
                HeaderValue::from_static(ALLOW_HEADERS),
            );
            headers.insert(
                HeaderName::from_static("access-control-allow-credentials"),
                HeaderValue::from_static("true"),
            );
            headers.insert(
                HeaderName::from_static("access-control-allow-methods"),
                HeaderValue::from_static(ALLOW_METHODS),
            );
            match HeaderValue::from_str(&allowed_origins) {
                Ok(value) => {
                    headers.insert(
                        HeaderName::from_static("access-control-allow-origin"),
                        value,
                    );
                }
                Err(err) => {
                    error!(error = %err, "allowed origin is not a valid header value");
                }
            }
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, test as actix_test, App, HttpResponse};

    #[get("/ok")]
    async fn ok_handler() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn attaches_headers_to_matched_routes() {
        let app = actix_test::init_service(
            App::new().wrap(Cors::new("http://front.example")).service(ok_handler),
        )
        .await;
        let request = actix_test::TestRequest::get().uri("/ok").to_request();
        let response = actix_test::call_service(&app, request).await;

        let headers = response.headers();
        assert_eq!(
            headers.get("access-control-allow-origin").map(|v| v.to_str().ok()),
            Some(Some("http://front.example"))
        );
        assert_eq!(
            headers.get("access-control-allow-methods").map(|v| v.to_str().ok()),
            Some(Some(ALLOW_METHODS))
        );
        assert_eq!(
            headers.get("access-control-allow-headers").map(|v| v.to_str().ok()),
            Some(Some(ALLOW_HEADERS))
        );
        assert_eq!(
            headers.get("access-control-allow-credentials").map(|v| v.to_str().ok()),
            Some(Some("true"))
        );
    }

    #[actix_web::test]
    async fn attaches_headers_to_handler_error_responses() {
        use crate::inbound::http::cities::get_cities;
        use crate::inbound::http::test_utils::{test_state, StubStore};
        use std::sync::Arc;

        let stub = Arc::new(StubStore::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(test_state(stub.clone()))
                .wrap(Cors::new("http://front.example"))
                .service(get_cities),
        )
        .await;
        let request = actix_test::TestRequest::get()
            .uri("/cities?offset=0&amount=0")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::RANGE_NOT_SATISFIABLE
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .map(|v| v.to_str().ok()),
            Some(Some("http://front.example"))
        );
    }

    #[actix_web::test]
    async fn attaches_headers_to_unmatched_routes() {
        let app = actix_test::init_service(App::new().wrap(Cors::new("*"))).await;
        let request = actix_test::TestRequest::get().uri("/missing").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        assert!(response.headers().get("access-control-allow-origin").is_some());
    }
}
