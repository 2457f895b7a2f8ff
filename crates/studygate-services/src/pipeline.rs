//! Pipeline wiring.
//!
//! Builds a ready-to-use submission pipeline from configuration: storage
//! backend from the factory, Postgres pool, and the host's collaborator
//! implementations.

use std::sync::Arc;

use studygate_core::models::DraftSnapshot;
use studygate_core::{AppError, Config, Localizer, Navigator, Notifications};
use studygate_db::ApplicationRepository;

use crate::submission::{OutcomeNotifier, SubmissionOrchestrator, SubmissionState};

/// A fully wired submission pipeline.
pub struct SubmissionPipeline {
    orchestrator: SubmissionOrchestrator,
}

impl SubmissionPipeline {
    /// Wire the pipeline from environment-driven configuration.
    ///
    /// Migrations are the caller's responsibility
    /// (`studygate_db::run_migrations`).
    pub async fn from_config(
        config: &Config,
        localizer: Arc<dyn Localizer>,
        notifications: Arc<dyn Notifications>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        let store = studygate_storage::create_store(config)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;
        let pool = studygate_db::connect(config).await?;
        let applications = Arc::new(ApplicationRepository::new(pool));
        let notifier = Arc::new(OutcomeNotifier::new(localizer, notifications, navigator));

        Ok(Self {
            orchestrator: SubmissionOrchestrator::new(store, applications, notifier),
        })
    }

    /// Submit a draft snapshot and return the terminal state.
    pub async fn submit(&self, snapshot: DraftSnapshot) -> SubmissionState {
        self.orchestrator.submit(snapshot).await
    }
}
