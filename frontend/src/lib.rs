//! Docstack - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the Docstack document-management platform:
//! upload documents, group them into datasets, run preprocessing, and
//! create extraction/annotation jobs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NotificationStack (toasts, context-fed)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /documents          DocumentsPage                           │
//! │  /documents/upload   UploadWizardPage                        │
//! │    ├── Upload        (UploadFilesControl)                    │
//! │    ├── Dataset       (DatasetWizardScreen)                   │
//! │    ├── Preprocessor  (UploadWizardPreprocessor)              │
//! │    └── Extraction    (AddJobConnector → /jobs/:id)           │
//! │  /jobs/:id           JobPage                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Constants (API base URL, routes, limits)
//! - [`types`] - Common types (API records, wizard step state, errors)
//! - [`components`] - UI components (wizard shell, step screens, toasts)
//! - [`pages`] - Routed pages
//! - [`services`] - Backend communication (documents, datasets, models, jobs)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod pages;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    AddJobRequest, Dataset, DatasetWithFiles, Document, Job, JobType, PreprocessRequest,
    Preprocessor, UploadedFile,
    // Wizard steps
    DatasetAction, DatasetOption, DatasetStepState, PreprocessorStepState,
    // Toasts
    Toast, ToastLevel,
    // Errors
    ApiError, ApiResult,
};

// Components
pub use components::*;

// Pages
pub use pages::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Docstack - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    // Toast handle for the whole app
    provide_notifier();

    view! {
        <Router>
            <main>
                <NotificationStack/>
                <Routes>
                    <Route path="/" view=DocumentsPage/>
                    <Route path="/documents" view=DocumentsPage/>
                    <Route path="/documents/upload" view=UploadWizardPage/>
                    <Route path="/jobs/:id" view=JobPage/>
                </Routes>
            </main>
        </Router>
    }
}
