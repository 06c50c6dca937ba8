//! Application configuration.
//!
//! Centralized configuration for the Docstack frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The Docstack backend gateway (documents, datasets, models, jobs).
pub const API_BASE_URL: &str = "http://localhost:8080/api";

/// Documents listing route.
///
/// The wizard's cancel/return target.
pub const DOCUMENTS_PAGE: &str = "/documents";

/// Upload wizard route.
pub const UPLOAD_WIZARD_PAGE: &str = "/documents/upload";

/// Job detail base route.
///
/// Individual jobs live at `<JOBS_PAGE>/<id>`.
pub const JOBS_PAGE: &str = "/jobs";

/// Maximum size of a single file accepted for upload (in bytes).
///
/// 100 MB limit.
pub const MAX_FILE_SIZE: f64 = 100.0 * 1024.0 * 1024.0;

/// How long a toast notification stays on screen (milliseconds).
pub const TOAST_DISMISS_MS: u32 = 6_000;

/// Maximum toasts kept on screen at once.
pub const MAX_TOASTS: usize = 5;

/// Languages offered for OCR preprocessing, as `(code, label)` pairs.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("fr", "French"),
    ("de", "German"),
    ("es", "Spanish"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
];
