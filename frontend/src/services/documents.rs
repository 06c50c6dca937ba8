//! Document upload and listing.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::API_BASE_URL;
use crate::services::{decode_json, expect_success};
use crate::types::{ApiError, ApiResult, Document, UploadedFile};

/// Upload the selected files as one multipart request.
///
/// The backend answers with one record per file, carrying the assigned
/// document id and a human-readable confirmation message.
pub async fn upload_files(files: &[File]) -> ApiResult<Vec<UploadedFile>> {
    let form_data = FormData::new()
        .map_err(|e| ApiError::Request(format!("Failed to create FormData: {:?}", e)))?;

    for file in files {
        form_data
            .append_with_blob_and_filename("files", file, &file.name())
            .map_err(|e| ApiError::Request(format!("Failed to append file: {:?}", e)))?;
    }

    let url = format!("{}/documents", API_BASE_URL);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| ApiError::Request(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("HTTP request failed: {}", e)))?;

    let response = expect_success(response).await?;
    decode_json(response).await
}

/// Fetch the document listing for the documents page.
pub async fn fetch_documents() -> ApiResult<Vec<Document>> {
    let url = format!("{}/documents", API_BASE_URL);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("HTTP request failed: {}", e)))?;

    let response = expect_success(response).await?;
    decode_json(response).await
}

#[cfg(test)]
mod tests {
    use crate::types::UploadedFile;

    #[test]
    fn upload_response_deserializes() {
        let json = r#"[
            {"id": 10, "message": "invoice-01.pdf uploaded"},
            {"id": 11, "message": "invoice-02.pdf uploaded"}
        ]"#;

        let records: Vec<UploadedFile> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 10);
        assert_eq!(records[1].message, "invoice-02.pdf uploaded");
    }
}
