//! Extraction/annotation job creation and lookup.

use gloo_net::http::Request;

use crate::config::API_BASE_URL;
use crate::services::{decode_json, expect_success};
use crate::types::{AddJobRequest, ApiError, ApiResult, Job};

/// Create a job over the uploaded files.
pub async fn add_job(request: &AddJobRequest) -> ApiResult<Job> {
    let url = format!("{}/jobs", API_BASE_URL);
    let request = Request::post(&url)
        .json(request)
        .map_err(|e| ApiError::Request(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("HTTP request failed: {}", e)))?;

    let response = expect_success(response).await?;
    decode_json(response).await
}

/// Fetch a single job for the job detail page.
pub async fn fetch_job(id: i64) -> ApiResult<Job> {
    let url = format!("{}/jobs/{}", API_BASE_URL, id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("HTTP request failed: {}", e)))?;

    let response = expect_success(response).await?;
    decode_json(response).await
}

#[cfg(test)]
mod tests {
    use crate::types::Job;

    #[test]
    fn job_deserializes() {
        let json = r#"{"id": 42, "name": "Q3 invoices", "status": "Pending"}"#;

        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, 42);
        assert_eq!(job.status, "Pending");
    }
}
