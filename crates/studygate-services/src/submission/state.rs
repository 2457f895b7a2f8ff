//! Submission state machine types.

use studygate_core::models::DraftField;
use uuid::Uuid;

/// State of one submission run.
///
/// A run moves `Idle → Validating → UploadingAssets → Persisting` and ends
/// in `Succeeded` or `Failed`. Terminal states end the run; a fresh submit
/// always starts a new run from `Idle` with a new draft snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Validating,
    UploadingAssets,
    Persisting,
    Succeeded { application_id: Uuid },
    Failed(FailureReason),
}

/// Why a run reached `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureReason {
    /// Required fields absent or blank. Local and pre-network: no store was
    /// contacted. Recoverable by user edit.
    MissingFields(Vec<DraftField>),
    /// The mandatory profile-picture upload failed; nothing was persisted.
    /// Recoverable by resubmitting.
    AssetUpload(String),
    /// The data-store insert was rejected or unreachable. Assets uploaded
    /// during this run are not rolled back. Recoverable by resubmitting.
    Persistence(String),
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded { .. } | SubmissionState::Failed(_)
        )
    }

    /// Whether the submit control should be enabled. Disabled while a run is
    /// in flight; re-enabled on failure so the user can retry manually. After
    /// success navigation makes the control irrelevant.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed(_))
    }
}

/// Observer of state transitions.
///
/// The rendering layer reflects states; the outcome notifier reacts to
/// terminal ones. Observers must not block.
pub trait StateObserver: Send + Sync {
    fn on_transition(&self, state: &SubmissionState);
}

/// Observer that ignores every transition.
pub struct NoOpObserver;

impl StateObserver for NoOpObserver {
    fn on_transition(&self, _state: &SubmissionState) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(SubmissionState::Succeeded {
            application_id: Uuid::new_v4()
        }
        .is_terminal());
        assert!(SubmissionState::Failed(FailureReason::AssetUpload("x".into())).is_terminal());
        assert!(!SubmissionState::Idle.is_terminal());
        assert!(!SubmissionState::UploadingAssets.is_terminal());
    }

    #[test]
    fn test_submit_control_enablement() {
        assert!(SubmissionState::Idle.accepts_submit());
        assert!(SubmissionState::Failed(FailureReason::Persistence("x".into())).accepts_submit());
        assert!(!SubmissionState::Validating.accepts_submit());
        assert!(!SubmissionState::UploadingAssets.accepts_submit());
        assert!(!SubmissionState::Persisting.accepts_submit());
        assert!(!SubmissionState::Succeeded {
            application_id: Uuid::new_v4()
        }
        .accepts_submit());
    }
}
