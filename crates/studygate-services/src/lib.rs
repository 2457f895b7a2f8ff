//! StudyGate Services Library
//!
//! The application submission pipeline: asset upload coordination, the
//! submission state machine, and outcome notification. Collaborators
//! (object store, data store, localization, notifications, navigation) are
//! injected, never ambient.

pub mod pipeline;
pub mod submission;

pub use pipeline::SubmissionPipeline;
pub use submission::{
    AssetUploader, FailureReason, NoOpObserver, OutcomeNotifier, StateObserver,
    SubmissionOrchestrator, SubmissionState, UploadError,
};
