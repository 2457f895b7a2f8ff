//! Submission orchestration.
//!
//! Sequences validation, asset upload, and persistence into one explicit
//! state machine per run. The object store and data store are injected
//! collaborators, so tests drive the machine with fakes.

use std::sync::Arc;

use studygate_core::models::{DraftSnapshot, NewApplication, UploadCategory};
use studygate_core::validation::missing_required_fields;
use studygate_db::ApplicationStore;
use studygate_storage::ObjectStore;

use super::state::{FailureReason, StateObserver, SubmissionState};
use super::uploader::AssetUploader;

/// Drives one submission run from a draft snapshot to a terminal state.
///
/// Invariants upheld here:
/// - validation failures are reported before any network call;
/// - the mandatory profile-picture upload completes (success or failure)
///   before any document upload is dispatched, and its failure aborts the
///   run with nothing persisted;
/// - document uploads are best-effort and run concurrently; a failed one is
///   logged and omitted from the record;
/// - exactly one insert attempt is made per run that reaches `Persisting`,
///   and a failed run never inserts;
/// - assets uploaded by a run that later fails are not rolled back.
pub struct SubmissionOrchestrator {
    uploader: AssetUploader,
    applications: Arc<dyn ApplicationStore>,
    observer: Arc<dyn StateObserver>,
}

impl SubmissionOrchestrator {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        applications: Arc<dyn ApplicationStore>,
        observer: Arc<dyn StateObserver>,
    ) -> Self {
        Self {
            uploader: AssetUploader::new(store),
            applications,
            observer,
        }
    }

    /// Run one submission. Returns the terminal state; the observer sees
    /// every transition along the way, terminal state included.
    pub async fn submit(&self, snapshot: DraftSnapshot) -> SubmissionState {
        let mut state = SubmissionState::Idle;
        self.transition(&mut state, SubmissionState::Validating);

        // Local validation; no store has been contacted yet.
        let mut application = match NewApplication::from_snapshot(&snapshot, None, Vec::new()) {
            Ok(application) => application,
            Err(_) => {
                let missing = missing_required_fields(&snapshot);
                tracing::debug!(missing = ?missing, "Submission rejected: required fields absent");
                self.transition(
                    &mut state,
                    SubmissionState::Failed(FailureReason::MissingFields(missing)),
                );
                return state;
            }
        };

        self.transition(&mut state, SubmissionState::UploadingAssets);

        // Mandatory step. The profile picture gates persistence: its upload
        // must resolve before any document upload is dispatched.
        if let Some(file) = snapshot.profile_picture() {
            match self
                .uploader
                .upload(file, UploadCategory::ProfilePicture)
                .await
            {
                Ok(url) => application.profile_picture_url = Some(url),
                Err(err) => {
                    tracing::error!(error = %err, "Profile picture upload failed; aborting run");
                    self.transition(
                        &mut state,
                        SubmissionState::Failed(FailureReason::AssetUpload(err.to_string())),
                    );
                    return state;
                }
            }
        }

        // Best-effort step. Document uploads run concurrently; the resulting
        // list keeps selection order with failed uploads omitted.
        let results = futures::future::join_all(
            snapshot
                .documents()
                .iter()
                .map(|file| self.uploader.upload(file, UploadCategory::Document)),
        )
        .await;

        for result in results {
            match result {
                Ok(url) => application.documents_urls.push(url),
                Err(err) => {
                    tracing::warn!(error = %err, "Document upload failed; omitting from record");
                }
            }
        }

        self.transition(&mut state, SubmissionState::Persisting);

        match self.applications.insert(application).await {
            Ok(id) => {
                tracing::info!(application_id = %id, "Application submitted");
                self.transition(&mut state, SubmissionState::Succeeded { application_id: id });
            }
            Err(err) => {
                tracing::error!(error = %err, "Application insert failed");
                self.transition(
                    &mut state,
                    SubmissionState::Failed(FailureReason::Persistence(err.to_string())),
                );
            }
        }

        state
    }

    fn transition(&self, state: &mut SubmissionState, next: SubmissionState) {
        tracing::debug!(from = ?state, to = ?next, "Submission state transition");
        *state = next;
        self.observer.on_transition(state);
    }
}
