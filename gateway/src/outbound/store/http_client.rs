//! Reqwest-backed store client adapter.
//!
//! Owns transport details only: request serialisation, timeouts, HTTP error
//! classification, and JSON decoding into domain entities. One client is
//! built at startup and shared by every request; dropping a call future
//! (client disconnect) cancels the pending store request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{
    AddPlaceRequestDto, AddPlaceResponseDto, CitiesResponseDto, PlacesResponseDto,
};
use crate::domain::{City, NewPlace, Page, Place, PlaceStore, StoreError};

/// Store client speaking JSON over HTTP against one endpoint.
pub struct StoreHttpClient {
    client: Client,
    base_url: Url,
}

impl StoreHttpClient {
    /// Build an adapter with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(path)
            .map_err(|err| StoreError::transport(format!("invalid store endpoint: {err}")))
    }

    async fn get_decoded<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, StoreError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        decode_payload(body.as_ref())
    }
}

fn page_query(page: Page) -> Vec<(&'static str, String)> {
    vec![
        ("offset", page.offset().to_string()),
        ("amount", page.amount().to_string()),
    ]
}

fn decode_payload<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, StoreError> {
    serde_json::from_slice(body)
        .map_err(|err| StoreError::backend(format!("invalid store payload: {err}")))
}

fn map_transport_error(err: reqwest::Error) -> StoreError {
    StoreError::transport(err.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> StoreError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };
    // The store answered, so this is a reported failure rather than an
    // unreachable backend.
    StoreError::backend(message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[async_trait]
impl PlaceStore for StoreHttpClient {
    async fn add_place(&self, place: NewPlace) -> Result<u64, StoreError> {
        let response = self
            .client
            .post(self.endpoint("places")?)
            .json(&AddPlaceRequestDto {
                title: &place.title,
                address: &place.address,
                description: &place.description,
            })
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        let decoded: AddPlaceResponseDto = decode_payload(body.as_ref())?;
        Ok(decoded.id)
    }

    async fn get_places(&self, page: Page) -> Result<Vec<Place>, StoreError> {
        let decoded: PlacesResponseDto = self.get_decoded("places", &page_query(page)).await?;
        Ok(decoded.into_domain())
    }

    async fn get_places_by_city(
        &self,
        city_id: u64,
        page: Page,
    ) -> Result<Vec<Place>, StoreError> {
        let mut query = page_query(page);
        query.push(("city_id", city_id.to_string()));
        let decoded: PlacesResponseDto = self.get_decoded("places", &query).await?;
        Ok(decoded.into_domain())
    }

    async fn get_cities(&self, page: Page) -> Result<Vec<City>, StoreError> {
        let decoded: CitiesResponseDto = self.get_decoded("cities", &page_query(page)).await?;
        Ok(decoded.into_domain())
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network mapping helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::client_error(StatusCode::BAD_REQUEST)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR)]
    #[case::upstream_gateway(StatusCode::BAD_GATEWAY)]
    fn non_success_statuses_are_reported_failures(#[case] status: StatusCode) {
        let error = map_status_error(status, b"{\"error\":\"boom\"}");
        assert!(matches!(error, StoreError::Backend { .. }), "got {error:?}");
    }

    #[test]
    fn status_error_includes_bounded_preview() {
        let long_body = "x".repeat(500);
        let StoreError::Backend { message } =
            map_status_error(StatusCode::INTERNAL_SERVER_ERROR, long_body.as_bytes())
        else {
            panic!("expected a backend error");
        };
        assert!(message.starts_with("status 500: "));
        assert!(message.ends_with("..."));
        assert!(message.len() < 200);
    }

    #[test]
    fn undecodable_success_payload_is_a_reported_failure() {
        let error = decode_payload::<PlacesResponseDto>(b"not json").expect_err("decode fails");
        assert!(matches!(error, StoreError::Backend { .. }));
    }

    #[test]
    fn page_query_carries_offset_and_amount() {
        let page = Page::new(3, 7).expect("valid window");
        assert_eq!(
            page_query(page),
            vec![("offset", "3".to_owned()), ("amount", "7".to_owned())]
        );
    }
}
