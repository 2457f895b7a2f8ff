//! In-progress application form state.
//!
//! A [`Draft`] holds one candidate's answers and selected files before
//! submission. It is a pure state container: setters never validate, and the
//! orchestrator works from an immutable [`DraftSnapshot`] so a run never
//! observes concurrent edits.

use bytes::Bytes;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Closed set of form fields.
///
/// Field identity is an enum rather than a string so the compiler enforces
/// exhaustiveness over the required set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    // Required at submission time
    FullName,
    Nationality,
    ContactNumber,
    EducationLevel,
    StudyField,
    InstructionLanguage,
    // Optional
    Email,
    Gender,
    DateOfBirth,
    Gpa,
    CurrentCountry,
    PreferredIntake,
    Notes,
    ScholarshipInterest,
}

impl DraftField {
    /// The six fields that must be non-empty before a submission run may
    /// leave the validation state.
    pub const REQUIRED: [DraftField; 6] = [
        DraftField::FullName,
        DraftField::Nationality,
        DraftField::ContactNumber,
        DraftField::EducationLevel,
        DraftField::StudyField,
        DraftField::InstructionLanguage,
    ];

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::FullName => "full_name",
            DraftField::Nationality => "nationality",
            DraftField::ContactNumber => "contact_number",
            DraftField::EducationLevel => "education_level",
            DraftField::StudyField => "study_field",
            DraftField::InstructionLanguage => "instruction_language",
            DraftField::Email => "email",
            DraftField::Gender => "gender",
            DraftField::DateOfBirth => "date_of_birth",
            DraftField::Gpa => "gpa",
            DraftField::CurrentCountry => "current_country",
            DraftField::PreferredIntake => "preferred_intake",
            DraftField::Notes => "notes",
            DraftField::ScholarshipInterest => "scholarship_interest",
        }
    }
}

/// A single form answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Gpa(f64),
    Date(NaiveDate),
}

/// Target category for one selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadCategory {
    ProfilePicture,
    Document,
}

impl UploadCategory {
    /// Path prefix under which blobs of this category are stored.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            UploadCategory::ProfilePicture => "profile-pictures",
            UploadCategory::Document => "documents",
        }
    }
}

/// A locally selected file, not yet uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl LocalFile {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// Mutable per-candidate form state.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    fields: BTreeMap<DraftField, FieldValue>,
    profile_picture: Option<LocalFile>,
    documents: Vec<LocalFile>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any prior value. No validation happens
    /// here; validation is the orchestrator's first state.
    pub fn set(&mut self, field: DraftField, value: FieldValue) {
        self.fields.insert(field, value);
    }

    /// Unset a field. Unset fields are persisted as absent, never as an
    /// empty string.
    pub fn clear(&mut self, field: DraftField) {
        self.fields.remove(&field);
    }

    /// Select a profile picture, replacing any prior selection.
    pub fn set_profile_picture(&mut self, file: LocalFile) {
        self.profile_picture = Some(file);
    }

    pub fn clear_profile_picture(&mut self) {
        self.profile_picture = None;
    }

    /// Select supporting documents. Re-choosing files resets the set; this
    /// is a full replace, never an append.
    pub fn set_documents(&mut self, files: Vec<LocalFile>) {
        self.documents = files;
    }

    /// Capture an immutable copy for a submission run.
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            fields: self.fields.clone(),
            profile_picture: self.profile_picture.clone(),
            documents: self.documents.clone(),
        }
    }
}

/// Immutable copy of a [`Draft`] captured at submit time.
#[derive(Debug, Clone)]
pub struct DraftSnapshot {
    fields: BTreeMap<DraftField, FieldValue>,
    profile_picture: Option<LocalFile>,
    documents: Vec<LocalFile>,
}

impl DraftSnapshot {
    /// Text value of a field, treating whitespace-only answers as unset.
    pub fn text(&self, field: DraftField) -> Option<&str> {
        match self.fields.get(&field) {
            Some(FieldValue::Text(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn flag(&self, field: DraftField) -> Option<bool> {
        match self.fields.get(&field) {
            Some(FieldValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn gpa(&self) -> Option<f64> {
        match self.fields.get(&DraftField::Gpa) {
            Some(FieldValue::Gpa(g)) => Some(*g),
            _ => None,
        }
    }

    pub fn date(&self, field: DraftField) -> Option<NaiveDate> {
        match self.fields.get(&field) {
            Some(FieldValue::Date(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn profile_picture(&self) -> Option<&LocalFile> {
        self.profile_picture.as_ref()
    }

    pub fn documents(&self) -> &[LocalFile] {
        &self.documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> LocalFile {
        LocalFile::new(name, "application/octet-stream", vec![1u8, 2, 3])
    }

    #[test]
    fn test_set_replaces_prior_value() {
        let mut draft = Draft::new();
        draft.set(DraftField::FullName, FieldValue::Text("Alice".into()));
        draft.set(DraftField::FullName, FieldValue::Text("Bob".into()));

        let snapshot = draft.snapshot();
        assert_eq!(snapshot.text(DraftField::FullName), Some("Bob"));
    }

    #[test]
    fn test_whitespace_text_reads_as_unset() {
        let mut draft = Draft::new();
        draft.set(DraftField::Email, FieldValue::Text("   ".into()));

        let snapshot = draft.snapshot();
        assert_eq!(snapshot.text(DraftField::Email), None);
    }

    #[test]
    fn test_clear_removes_value() {
        let mut draft = Draft::new();
        draft.set(DraftField::Notes, FieldValue::Text("call back".into()));
        draft.clear(DraftField::Notes);

        assert_eq!(draft.snapshot().text(DraftField::Notes), None);
    }

    #[test]
    fn test_document_selection_is_full_replace() {
        let mut draft = Draft::new();
        draft.set_documents(vec![file("a.pdf"), file("b.pdf")]);
        draft.set_documents(vec![file("c.pdf")]);

        let snapshot = draft.snapshot();
        assert_eq!(snapshot.documents().len(), 1);
        assert_eq!(snapshot.documents()[0].filename, "c.pdf");
    }

    #[test]
    fn test_profile_picture_selection_replaces() {
        let mut draft = Draft::new();
        draft.set_profile_picture(file("old.png"));
        draft.set_profile_picture(file("new.png"));

        let snapshot = draft.snapshot();
        assert_eq!(snapshot.profile_picture().unwrap().filename, "new.png");
    }

    #[test]
    fn test_snapshot_is_detached_from_later_edits() {
        let mut draft = Draft::new();
        draft.set(DraftField::FullName, FieldValue::Text("Alice".into()));
        let snapshot = draft.snapshot();

        draft.set(DraftField::FullName, FieldValue::Text("Mallory".into()));
        draft.set_documents(vec![file("late.pdf")]);

        assert_eq!(snapshot.text(DraftField::FullName), Some("Alice"));
        assert!(snapshot.documents().is_empty());
    }

    #[test]
    fn test_required_fields_are_marked() {
        for field in DraftField::REQUIRED {
            assert!(field.is_required());
        }
        assert!(!DraftField::Email.is_required());
        assert!(!DraftField::Gpa.is_required());
    }
}
