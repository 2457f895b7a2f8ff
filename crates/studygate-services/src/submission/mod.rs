//! The submission pipeline
//!
//! One run per submit action: validate the draft snapshot, upload the
//! mandatory profile picture (if selected), upload supporting documents
//! best-effort, persist the application record, report the terminal outcome.

pub mod notifier;
pub mod orchestrator;
pub mod state;
pub mod uploader;

pub use notifier::OutcomeNotifier;
pub use orchestrator::SubmissionOrchestrator;
pub use state::{FailureReason, NoOpObserver, StateObserver, SubmissionState};
pub use uploader::{AssetUploader, UploadError};
