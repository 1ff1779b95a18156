//! Decoding of list-call query strings into typed arguments.
//!
//! The decoder is deliberately strict about `amount` (it bounds the store
//! call) and lenient about everything else: `offset` defaults to zero and
//! unknown keys are ignored, matching the store service's own contract.

use actix_web::web;
use serde::Deserialize;

use crate::domain::{ListQuery, Page};

use super::error::ApiError;

/// Raw shape of `?offset=<uint>&amount=<uint>[&city_id=<uint>]`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListParams {
    #[serde(default)]
    offset: u64,
    amount: u64,
    city_id: Option<u64>,
}

/// Decode and validate a list query string.
///
/// Missing or non-numeric `amount` (or non-numeric `offset`) is a decode
/// failure; a zero `amount` decodes fine but is rejected as an unsatisfiable
/// range before any store call is made.
pub(crate) fn decode_list_query(query_string: &str) -> Result<ListQuery, ApiError> {
    let params = web::Query::<ListParams>::from_query(query_string)
        .map_err(ApiError::decode)?
        .into_inner();
    let page = Page::new(params.offset, params.amount)
        .map_err(|err| ApiError::InvalidRange(err.to_string()))?;
    Ok(ListQuery {
        page,
        city_id: params.city_id,
    })
}
