//! Outcome notification.
//!
//! Maps terminal submission states to user-visible feedback and
//! post-submission navigation. Only localized summaries reach the user; raw
//! backend errors stay in logs. No automatic retries are issued here.

use std::sync::Arc;

use studygate_core::{Localizer, Navigator, NoticeKind, Notifications, Route};

use super::state::{FailureReason, StateObserver, SubmissionState};

/// Subscribes to orchestrator terminal states.
pub struct OutcomeNotifier {
    localizer: Arc<dyn Localizer>,
    notifications: Arc<dyn Notifications>,
    navigator: Arc<dyn Navigator>,
}

impl OutcomeNotifier {
    pub fn new(
        localizer: Arc<dyn Localizer>,
        notifications: Arc<dyn Notifications>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            localizer,
            notifications,
            navigator,
        }
    }

    fn notify(&self, kind: NoticeKind, title_key: &str, description_key: &str) {
        self.notifications.notify(
            kind,
            &self.localizer.t(title_key),
            &self.localizer.t(description_key),
        );
    }
}

impl StateObserver for OutcomeNotifier {
    fn on_transition(&self, state: &SubmissionState) {
        match state {
            // Form retained as-is for correction; nothing else happens.
            SubmissionState::Failed(FailureReason::MissingFields(_)) => {
                self.notify(
                    NoticeKind::Error,
                    "application.missing_fields_title",
                    "application.missing_fields_description",
                );
            }
            // Draft retained so the user can retry manually.
            SubmissionState::Failed(_) => {
                self.notify(
                    NoticeKind::Error,
                    "application.submit_failed_title",
                    "application.submit_failed_description",
                );
            }
            SubmissionState::Succeeded { .. } => {
                self.notify(
                    NoticeKind::Info,
                    "application.submit_success_title",
                    "application.submit_success_description",
                );
                self.navigator.go_to(Route::MyApplications);
            }
            // Non-terminal states are the rendering layer's concern.
            _ => {}
        }
    }
}
