//! UI Components for the Docstack frontend.
//!
//! # Shell Components
//! - [`Wizard`] / [`WizardButtons`] - generic step shell and forward button
//! - [`NotificationStack`] - toast notifications, fed by [`Notifier`]
//!
//! # Wizard Step Components
//! - [`UploadFilesControl`] - multi-file picker
//! - [`DatasetWizardScreen`] - dataset assignment step
//! - [`UploadWizardPreprocessor`] - preprocessing step
//! - [`AddJobConnector`] - job creation step

mod add_job;
mod dataset_screen;
mod notifications;
mod preprocessor_screen;
mod upload_files;
mod wizard;

pub use add_job::*;
pub use dataset_screen::*;
pub use notifications::*;
pub use preprocessor_screen::*;
pub use upload_files::*;
pub use wizard::*;
