//! Dataset creation and file attachment.

use gloo_net::http::Request;
use serde_json::json;

use crate::config::API_BASE_URL;
use crate::services::{decode_json, expect_success};
use crate::types::{ApiError, ApiResult, Dataset, DatasetAction, DatasetWithFiles};

/// Fetch all datasets for the dataset-selection screen.
pub async fn fetch_datasets() -> ApiResult<Vec<Dataset>> {
    let url = format!("{}/datasets", API_BASE_URL);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("HTTP request failed: {}", e)))?;

    let response = expect_success(response).await?;
    decode_json(response).await
}

/// Create a new, empty dataset.
pub async fn add_dataset(name: &str) -> ApiResult<Dataset> {
    let url = format!("{}/datasets", API_BASE_URL);
    let request = Request::post(&url)
        .json(&json!({ "name": name }))
        .map_err(|e| ApiError::Request(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("HTTP request failed: {}", e)))?;

    let response = expect_success(response).await?;
    decode_json(response).await
}

/// Attach uploaded files to a dataset by name.
pub async fn add_files_to_dataset(bond: &DatasetWithFiles) -> ApiResult<()> {
    let url = format!("{}/datasets/files", API_BASE_URL);
    let request = Request::post(&url)
        .json(bond)
        .map_err(|e| ApiError::Request(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("HTTP request failed: {}", e)))?;

    expect_success(response).await?;
    Ok(())
}

/// Execute the mutation the dataset step planned.
///
/// A new dataset is created first and the uploaded files are attached to
/// it afterwards, so the two branches converge on the same end state: the
/// chosen dataset contains the uploaded files.
pub async fn apply_dataset_action(action: DatasetAction) -> ApiResult<()> {
    match action {
        DatasetAction::AttachFiles { name, file_ids } => {
            add_files_to_dataset(&DatasetWithFiles {
                name,
                objects: file_ids,
            })
            .await
        }
        DatasetAction::CreateWithFiles { name, file_ids } => {
            let dataset = add_dataset(&name).await?;
            if !file_ids.is_empty() {
                add_files_to_dataset(&DatasetWithFiles {
                    name: dataset.name,
                    objects: file_ids,
                })
                .await?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Dataset, DatasetWithFiles};

    #[test]
    fn dataset_listing_deserializes() {
        let json = r#"[
            {"id": 1, "name": "Contracts"},
            {"id": 2, "name": "Invoices"}
        ]"#;

        let datasets: Vec<Dataset> = serde_json::from_str(json).unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[1].name, "Invoices");
    }

    #[test]
    fn bond_request_serializes_camel_case() {
        let bond = DatasetWithFiles {
            name: "Invoices".to_string(),
            objects: vec![10, 11],
        };
        let json = serde_json::to_value(&bond).unwrap();
        assert_eq!(json["name"], "Invoices");
        assert_eq!(json["objects"], serde_json::json!([10, 11]));
    }
}
