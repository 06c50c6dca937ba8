//! Routed pages.
//!
//! - [`DocumentsPage`] - document listing, the wizard's return target
//! - [`UploadWizardPage`] - the four-step upload wizard
//! - [`JobPage`] - job detail, the wizard's success target

mod documents;
mod job_detail;
mod upload_wizard;

pub use documents::*;
pub use job_detail::*;
pub use upload_wizard::*;
