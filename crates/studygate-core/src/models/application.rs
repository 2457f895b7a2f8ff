//! Durable application records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

use super::draft::{DraftField, DraftSnapshot};

/// Review status of a persisted application.
///
/// The submission pipeline only ever writes `Pending`; later transitions are
/// made by consulting staff outside this pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "application_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Accepted,
    Rejected,
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        ApplicationStatus::Pending
    }
}

/// Payload for one insert into the applications table.
///
/// Asset URLs are already resolved by the time this is built; a
/// `NewApplication` never references an upload that has not succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewApplication {
    pub full_name: String,
    pub nationality: String,
    pub contact_number: String,
    pub education_level: String,
    pub study_field: String,
    pub instruction_language: String,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gpa: Option<f64>,
    pub current_country: Option<String>,
    pub preferred_intake: Option<String>,
    pub notes: Option<String>,
    pub scholarship_interest: Option<bool>,
    pub profile_picture_url: Option<String>,
    pub documents_urls: Vec<String>,
}

impl NewApplication {
    /// Build the insert payload from a validated snapshot plus the resolved
    /// asset URLs. Fails if a required field is absent; the orchestrator
    /// validates before any upload, so hitting that path here is a bug.
    pub fn from_snapshot(
        snapshot: &DraftSnapshot,
        profile_picture_url: Option<String>,
        documents_urls: Vec<String>,
    ) -> Result<Self, AppError> {
        let required = |field: DraftField| -> Result<String, AppError> {
            snapshot
                .text(field)
                .map(String::from)
                .ok_or_else(|| {
                    AppError::InvalidInput(format!("Missing required field: {}", field.as_str()))
                })
        };

        Ok(Self {
            full_name: required(DraftField::FullName)?,
            nationality: required(DraftField::Nationality)?,
            contact_number: required(DraftField::ContactNumber)?,
            education_level: required(DraftField::EducationLevel)?,
            study_field: required(DraftField::StudyField)?,
            instruction_language: required(DraftField::InstructionLanguage)?,
            email: snapshot.text(DraftField::Email).map(String::from),
            gender: snapshot.text(DraftField::Gender).map(String::from),
            date_of_birth: snapshot.date(DraftField::DateOfBirth),
            gpa: snapshot.gpa(),
            current_country: snapshot.text(DraftField::CurrentCountry).map(String::from),
            preferred_intake: snapshot.text(DraftField::PreferredIntake).map(String::from),
            notes: snapshot.text(DraftField::Notes).map(String::from),
            scholarship_interest: snapshot.flag(DraftField::ScholarshipInterest),
            profile_picture_url,
            documents_urls,
        })
    }
}

/// A persisted application as read back from the data store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: Uuid,
    pub full_name: String,
    pub nationality: String,
    pub contact_number: String,
    pub education_level: String,
    pub study_field: String,
    pub instruction_language: String,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gpa: Option<f64>,
    pub current_country: Option<String>,
    pub preferred_intake: Option<String>,
    pub notes: Option<String>,
    pub scholarship_interest: Option<bool>,
    pub profile_picture_url: Option<String>,
    pub documents_urls: Vec<String>,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
}
