//! Fake collaborators for driving the submission pipeline in tests.
//!
//! Everything the orchestrator talks to is injected behind a trait, so the
//! pipeline runs deterministically with no network and no database.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use std::sync::Mutex;
use studygate_core::models::{
    ApplicationRecord, ApplicationStatus, Draft, DraftField, FieldValue, LocalFile,
    NewApplication, UploadCategory,
};
use studygate_core::{AppError, Navigator, NoticeKind, Notifications, Route, StorageBackend};
use studygate_db::ApplicationStore;
use studygate_services::{StateObserver, SubmissionState};
use studygate_storage::{ObjectStore, StorageError, StorageResult};
use uuid::Uuid;

/// One recorded `put` attempt, successful or not.
#[derive(Debug, Clone)]
pub struct PutCall {
    pub key: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// In-memory object store with failure injection.
#[derive(Default)]
pub struct FakeObjectStore {
    fail_prefixes: Vec<String>,
    fail_payloads: Vec<Vec<u8>>,
    puts: Mutex<Vec<PutCall>>,
}

impl FakeObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every upload in the given category.
    pub fn failing_category(mut self, category: UploadCategory) -> Self {
        self.fail_prefixes
            .push(format!("{}/", category.path_prefix()));
        self
    }

    /// Fail any upload whose payload matches `bytes` exactly.
    pub fn failing_payload(mut self, bytes: &[u8]) -> Self {
        self.fail_payloads.push(bytes.to_vec());
        self
    }

    /// All recorded `put` attempts, in call order.
    pub fn puts(&self) -> Vec<PutCall> {
        self.puts.lock().unwrap().clone()
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }

    /// Key recorded for the attempt carrying this payload, if any.
    pub fn key_for_payload(&self, bytes: &[u8]) -> Option<String> {
        self.puts
            .lock()
            .unwrap()
            .iter()
            .find(|call| call.data == bytes)
            .map(|call| call.key.clone())
    }
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> StorageResult<()> {
        self.puts.lock().unwrap().push(PutCall {
            key: key.to_string(),
            content_type: content_type.to_string(),
            data: data.to_vec(),
        });

        let injected = self.fail_prefixes.iter().any(|p| key.starts_with(p))
            || self.fail_payloads.iter().any(|p| p[..] == data[..]);
        if injected {
            return Err(StorageError::UploadFailed("injected failure".to_string()));
        }

        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://cdn.test/{}", key)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

/// In-memory application store with failure injection.
#[derive(Default)]
pub struct FakeApplicationStore {
    fail: bool,
    inserts: Mutex<Vec<(Uuid, NewApplication)>>,
}

impl FakeApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            inserts: Mutex::new(Vec::new()),
        }
    }

    /// Successfully inserted applications, in insert order.
    pub fn inserted(&self) -> Vec<NewApplication> {
        self.inserts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, app)| app.clone())
            .collect()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.lock().unwrap().len()
    }
}

#[async_trait]
impl ApplicationStore for FakeApplicationStore {
    async fn insert(&self, application: NewApplication) -> Result<Uuid, AppError> {
        if self.fail {
            return Err(AppError::Internal("injected insert failure".to_string()));
        }
        let id = Uuid::new_v4();
        self.inserts.lock().unwrap().push((id, application));
        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ApplicationRecord>, AppError> {
        let found = self
            .inserts
            .lock()
            .unwrap()
            .iter()
            .find(|(stored_id, _)| *stored_id == id)
            .map(|(stored_id, app)| ApplicationRecord {
                id: *stored_id,
                full_name: app.full_name.clone(),
                nationality: app.nationality.clone(),
                contact_number: app.contact_number.clone(),
                education_level: app.education_level.clone(),
                study_field: app.study_field.clone(),
                instruction_language: app.instruction_language.clone(),
                email: app.email.clone(),
                gender: app.gender.clone(),
                date_of_birth: app.date_of_birth,
                gpa: app.gpa,
                current_country: app.current_country.clone(),
                preferred_intake: app.preferred_intake.clone(),
                notes: app.notes.clone(),
                scholarship_interest: app.scholarship_interest,
                profile_picture_url: app.profile_picture_url.clone(),
                documents_urls: app.documents_urls.clone(),
                status: ApplicationStatus::Pending,
                submitted_at: Utc::now(),
            });
        Ok(found)
    }
}

/// Observer that records every state transition.
#[derive(Default)]
pub struct RecordingObserver {
    states: Mutex<Vec<SubmissionState>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> Vec<SubmissionState> {
        self.states.lock().unwrap().clone()
    }
}

impl StateObserver for RecordingObserver {
    fn on_transition(&self, state: &SubmissionState) {
        self.states.lock().unwrap().push(state.clone());
    }
}

/// Notification hook that records every notice.
#[derive(Default)]
pub struct RecordingNotifications {
    notices: Mutex<Vec<(NoticeKind, String, String)>>,
}

impl RecordingNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(NoticeKind, String, String)> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifications for RecordingNotifications {
    fn notify(&self, kind: NoticeKind, title: &str, description: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((kind, title.to_string(), description.to_string()));
    }
}

/// Navigation hook that records every requested route.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// A draft with every required field filled.
pub fn complete_draft() -> Draft {
    let mut draft = Draft::new();
    draft.set(DraftField::FullName, FieldValue::Text("Alice".into()));
    draft.set(DraftField::Nationality, FieldValue::Text("X".into()));
    draft.set(DraftField::ContactNumber, FieldValue::Text("+1".into()));
    draft.set(DraftField::EducationLevel, FieldValue::Text("bachelor".into()));
    draft.set(DraftField::StudyField, FieldValue::Text("CS".into()));
    draft.set(
        DraftField::InstructionLanguage,
        FieldValue::Text("english".into()),
    );
    draft
}

pub fn file(name: &str, contents: &[u8]) -> LocalFile {
    LocalFile::new(name, "application/octet-stream", contents.to_vec())
}
