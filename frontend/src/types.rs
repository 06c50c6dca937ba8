//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Backend request/response structures
//! - **Wizard Step Types** - Per-step state plus the pure gating and
//!   planning logic the wizard page runs on "next"
//! - **Toast Types** - Notification entries
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// API Types
// =============================================================================

/// A document known to the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Backend identifier
    pub id: i64,
    /// Original file name
    pub name: String,
    /// Upload timestamp, RFC 3339 (as reported by the backend)
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// One record of the upload response, one per uploaded file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Identifier assigned by the backend
    pub id: i64,
    /// Human-readable confirmation, e.g. `"invoice.pdf uploaded"`
    pub message: String,
}

/// A dataset documents can be grouped into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: i64,
    pub name: String,
}

/// Request body attaching uploaded files to a dataset by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetWithFiles {
    /// Target dataset name
    pub name: String,
    /// File identifiers to attach
    pub objects: Vec<i64>,
}

/// A preprocessing model offered by the models service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preprocessor {
    /// Model identifier, e.g. `"preprocessing"` or `"easy-ocr"`
    pub id: String,
    /// Display name
    pub name: String,
}

/// Request body for kicking off preprocessing on uploaded files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreprocessRequest {
    /// Files to preprocess
    pub file_ids: Vec<i64>,
    /// Selected model identifier
    pub preprocessor: String,
    /// OCR language codes, may be empty
    pub languages: Vec<String>,
}

/// Pipeline flavor for a new job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    /// Automatic extraction followed by manual annotation
    ExtractionWithAnnotationJob,
    /// Automatic extraction only
    ExtractionJob,
    /// Manual annotation only, no extraction pipeline
    AnnotationJob,
}

/// Request body for job creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddJobRequest {
    /// Job display name
    pub name: String,
    /// Uploaded file identifiers the job operates on
    pub files: Vec<i64>,
    /// Pipeline flavor
    pub job_type: JobType,
}

/// A created or fetched job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub name: String,
    /// Backend lifecycle status, e.g. `"Pending"`, `"In Progress"`
    pub status: String,
}

// =============================================================================
// Wizard Step Types
// =============================================================================

/// The dataset step's radio choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DatasetOption {
    /// Leave the uploaded files outside any dataset
    #[default]
    NoDataset,
    /// Attach the uploaded files to an existing dataset
    Existing,
    /// Create a dataset and put the uploaded files in it
    New,
}

/// Everything the dataset step screen records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatasetStepState {
    pub option: DatasetOption,
    /// Chosen dataset when `option == Existing`
    pub selected: Option<Dataset>,
    /// Candidate name when `option == New`
    pub new_name: String,
}

/// The network action the dataset step resolved to.
#[derive(Clone, Debug, PartialEq)]
pub enum DatasetAction {
    /// Attach `file_ids` to the existing dataset `name`
    AttachFiles { name: String, file_ids: Vec<i64> },
    /// Create dataset `name`, then attach `file_ids` to it
    CreateWithFiles { name: String, file_ids: Vec<i64> },
}

impl DatasetStepState {
    /// Whether the recorded choice is self-consistent.
    ///
    /// Gates the step's next button: the existing-dataset option needs a
    /// selected dataset, the new-dataset option needs a non-empty name.
    pub fn is_complete(&self) -> bool {
        match self.option {
            DatasetOption::NoDataset => true,
            DatasetOption::Existing => self.selected.is_some(),
            DatasetOption::New => !self.new_name.trim().is_empty(),
        }
    }

    /// Plan the mutation to run when leaving the step.
    ///
    /// Returns `None` when nothing should be called: no-dataset choice,
    /// or an incomplete selection.
    pub fn action(&self, uploaded: &[i64]) -> Option<DatasetAction> {
        match self.option {
            DatasetOption::NoDataset => None,
            DatasetOption::Existing => {
                let dataset = self.selected.as_ref()?;
                Some(DatasetAction::AttachFiles {
                    name: dataset.name.clone(),
                    file_ids: uploaded.to_vec(),
                })
            }
            DatasetOption::New => {
                let name = self.new_name.trim();
                if name.is_empty() {
                    return None;
                }
                Some(DatasetAction::CreateWithFiles {
                    name: name.to_string(),
                    file_ids: uploaded.to_vec(),
                })
            }
        }
    }
}

/// Everything the preprocessor step screen records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreprocessorStepState {
    /// `None` means "skip preprocessing"
    pub preprocessor: Option<Preprocessor>,
    /// Selected OCR language codes
    pub languages: Vec<String>,
}

impl PreprocessorStepState {
    /// Build the preprocessing request, if one should be sent.
    ///
    /// Requires a selected preprocessor and at least one uploaded file.
    pub fn request(&self, uploaded: &[i64]) -> Option<PreprocessRequest> {
        let preprocessor = self.preprocessor.as_ref()?;
        if uploaded.is_empty() {
            return None;
        }
        Some(PreprocessRequest {
            file_ids: uploaded.to_vec(),
            preprocessor: preprocessor.id.clone(),
            languages: self.languages.clone(),
        })
    }
}

// =============================================================================
// Toast Types
// =============================================================================

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
        }
    }
}

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Monotonic id, used for keyed rendering and dismissal
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors from backend calls.
///
/// Every variant renders a display string suitable for an error toast.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// Request could not be built or sent.
    #[error("Request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The request could not be built (multipart or JSON body).
    #[error("Invalid request: {0}")]
    Request(String),
}

/// Result type alias for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(id: i64, name: &str) -> Dataset {
        Dataset {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn no_dataset_choice_is_always_complete() {
        let state = DatasetStepState::default();
        assert!(state.is_complete());
        assert_eq!(state.action(&[1, 2]), None);
    }

    #[test]
    fn existing_option_requires_a_selected_dataset() {
        let mut state = DatasetStepState {
            option: DatasetOption::Existing,
            ..Default::default()
        };
        assert!(!state.is_complete());
        assert_eq!(state.action(&[1]), None);

        state.selected = Some(dataset(7, "Contracts"));
        assert!(state.is_complete());
        assert_eq!(
            state.action(&[10, 11]),
            Some(DatasetAction::AttachFiles {
                name: "Contracts".to_string(),
                file_ids: vec![10, 11],
            })
        );
    }

    #[test]
    fn new_option_requires_a_non_empty_name() {
        let mut state = DatasetStepState {
            option: DatasetOption::New,
            ..Default::default()
        };
        assert!(!state.is_complete());

        state.new_name = "   ".to_string();
        assert!(!state.is_complete());
        assert_eq!(state.action(&[10]), None);

        state.new_name = "Invoices".to_string();
        assert!(state.is_complete());
        assert_eq!(
            state.action(&[10, 11]),
            Some(DatasetAction::CreateWithFiles {
                name: "Invoices".to_string(),
                file_ids: vec![10, 11],
            })
        );
    }

    #[test]
    fn new_dataset_name_is_trimmed_in_the_plan() {
        let state = DatasetStepState {
            option: DatasetOption::New,
            new_name: "  Invoices  ".to_string(),
            ..Default::default()
        };
        match state.action(&[1]) {
            Some(DatasetAction::CreateWithFiles { name, .. }) => assert_eq!(name, "Invoices"),
            other => panic!("unexpected plan: {:?}", other),
        }
    }

    #[test]
    fn preprocessing_needs_a_selection_and_uploads() {
        let mut state = PreprocessorStepState::default();
        assert_eq!(state.request(&[10, 11]), None);

        state.preprocessor = Some(Preprocessor {
            id: "easy-ocr".to_string(),
            name: "Easy OCR".to_string(),
        });
        assert_eq!(state.request(&[]), None);

        state.languages = vec!["en".to_string()];
        assert_eq!(
            state.request(&[10, 11]),
            Some(PreprocessRequest {
                file_ids: vec![10, 11],
                preprocessor: "easy-ocr".to_string(),
                languages: vec!["en".to_string()],
            })
        );
    }

    #[test]
    fn preprocess_request_serializes_camel_case() {
        let request = PreprocessRequest {
            file_ids: vec![10, 11],
            preprocessor: "easy-ocr".to_string(),
            languages: vec!["en".to_string()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fileIds"], serde_json::json!([10, 11]));
        assert_eq!(json["preprocessor"], "easy-ocr");
        assert_eq!(json["languages"], serde_json::json!(["en"]));
    }

    #[test]
    fn add_job_request_serializes_job_type_variant_name() {
        let request = AddJobRequest {
            name: "Q3 invoices".to_string(),
            files: vec![10, 11],
            job_type: JobType::ExtractionWithAnnotationJob,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["jobType"], "ExtractionWithAnnotationJob");
        assert_eq!(json["files"], serde_json::json!([10, 11]));
    }

    #[test]
    fn api_error_displays_a_toastable_message() {
        let err = ApiError::Server {
            status: 422,
            message: "unsupported file type".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Server error (422): unsupported file type"
        );

        let err = ApiError::Request("Failed to create FormData".to_string());
        assert_eq!(err.to_string(), "Invalid request: Failed to create FormData");
    }
}
