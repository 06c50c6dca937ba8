//! Preprocessing model listing and runs.

use gloo_net::http::Request;

use crate::config::API_BASE_URL;
use crate::services::{decode_json, expect_success};
use crate::types::{ApiError, ApiResult, PreprocessRequest, Preprocessor};

/// Fetch the preprocessing models offered by the models service.
pub async fn fetch_preprocessors() -> ApiResult<Vec<Preprocessor>> {
    let url = format!("{}/models/preprocessors", API_BASE_URL);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("HTTP request failed: {}", e)))?;

    let response = expect_success(response).await?;
    decode_json(response).await
}

/// Kick off preprocessing for the uploaded files.
///
/// The run is asynchronous on the backend side; a success here only means
/// the request was accepted. The caller decides what to do with a failure.
pub async fn run_preprocessing(request: &PreprocessRequest) -> ApiResult<()> {
    let url = format!("{}/models/preprocessing", API_BASE_URL);
    let request = Request::post(&url)
        .json(request)
        .map_err(|e| ApiError::Request(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("HTTP request failed: {}", e)))?;

    expect_success(response).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::types::Preprocessor;

    #[test]
    fn preprocessor_listing_deserializes() {
        let json = r#"[
            {"id": "preprocessing", "name": "Default preprocessing"},
            {"id": "easy-ocr", "name": "Easy OCR"}
        ]"#;

        let models: Vec<Preprocessor> = serde_json::from_str(json).unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[1].id, "easy-ocr");
    }
}
