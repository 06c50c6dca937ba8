//! Backend HTTP services.
//!
//! This module provides services for talking to the Docstack backend:
//!
//! # Services
//!
//! - [`documents`] - File upload and document listing
//! - [`datasets`] - Dataset creation and file attachment
//! - [`models`] - Preprocessing model listing and runs
//! - [`jobs`] - Extraction/annotation job creation and lookup
//!
//! All calls go through `gloo-net` and return [`ApiResult`],
//! so failures carry a message suitable for an error toast.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::types::{ApiError, ApiResult};

pub mod datasets;
pub mod documents;
pub mod jobs;
pub mod models;

pub use datasets::*;
pub use documents::*;
pub use jobs::*;
pub use models::*;

/// Turn a non-2xx response into [`ApiError::Server`] with the body text.
pub(crate) async fn expect_success(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ApiError::Server { status, message })
}

/// Decode a JSON body, mapping parse failures to [`ApiError::Decode`].
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
