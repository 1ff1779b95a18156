//! Response encoding.
//!
//! Serialisation goes through `serde_json` explicitly instead of
//! `web::Json` so a failed encode surfaces as [`ApiError::Encoding`] and
//! maps to 500 like every other outcome. With the fixed response schemas
//! this should not occur; the mapping exists so the pipeline stays total.

use actix_web::HttpResponse;
use serde::Serialize;

use super::error::{ApiError, ApiResult};

/// Serialise `payload` and wrap it in a 200 JSON response.
pub(crate) fn json_response<T: Serialize>(payload: &T) -> ApiResult<HttpResponse> {
    let body = serde_json::to_string(payload).map_err(ApiError::encoding)?;
    Ok(HttpResponse::Ok()
        .content_type(actix_web::http::header::ContentType::json())
        .body(body))
}
