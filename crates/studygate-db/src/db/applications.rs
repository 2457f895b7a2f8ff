//! Application repository: insert and lookup for the applications table.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres};
use studygate_core::models::{ApplicationRecord, ApplicationStatus, NewApplication};
use studygate_core::AppError;
use uuid::Uuid;

/// Trait over the relational data store, as seen by the orchestrator.
///
/// The orchestrator holds an `Arc<dyn ApplicationStore>` so tests can inject
/// an in-memory fake; `ApplicationRepository` is the Postgres
/// implementation.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Insert one application and return its server-assigned id. Exactly one
    /// insert attempt is made per successful submission run.
    async fn insert(&self, application: NewApplication) -> Result<Uuid, AppError>;

    /// Fetch a persisted application by id.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<ApplicationRecord>, AppError>;
}

/// Row type for the applications table (for FromRow).
#[derive(Debug, sqlx::FromRow)]
struct ApplicationRow {
    id: Uuid,
    full_name: String,
    nationality: String,
    contact_number: String,
    education_level: String,
    study_field: String,
    instruction_language: String,
    email: Option<String>,
    gender: Option<String>,
    date_of_birth: Option<NaiveDate>,
    gpa: Option<f64>,
    current_country: Option<String>,
    preferred_intake: Option<String>,
    notes: Option<String>,
    scholarship_interest: Option<bool>,
    profile_picture_url: Option<String>,
    documents_urls: Json<Vec<String>>,
    status: ApplicationStatus,
    submitted_at: DateTime<Utc>,
}

impl ApplicationRow {
    fn into_record(self) -> ApplicationRecord {
        ApplicationRecord {
            id: self.id,
            full_name: self.full_name,
            nationality: self.nationality,
            contact_number: self.contact_number,
            education_level: self.education_level,
            study_field: self.study_field,
            instruction_language: self.instruction_language,
            email: self.email,
            gender: self.gender,
            date_of_birth: self.date_of_birth,
            gpa: self.gpa,
            current_country: self.current_country,
            preferred_intake: self.preferred_intake,
            notes: self.notes,
            scholarship_interest: self.scholarship_interest,
            profile_picture_url: self.profile_picture_url,
            documents_urls: self.documents_urls.0,
            status: self.status,
            submitted_at: self.submitted_at,
        }
    }
}

/// Repository for the applications table.
#[derive(Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for ApplicationRepository {
    #[tracing::instrument(skip(self, application), fields(db.table = "applications"))]
    async fn insert(&self, application: NewApplication) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar::<Postgres, Uuid>(
            r#"
            INSERT INTO applications (
                full_name, nationality, contact_number, education_level,
                study_field, instruction_language, email, gender,
                date_of_birth, gpa, current_country, preferred_intake,
                notes, scholarship_interest, profile_picture_url,
                documents_urls, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING id
            "#,
        )
        .bind(&application.full_name)
        .bind(&application.nationality)
        .bind(&application.contact_number)
        .bind(&application.education_level)
        .bind(&application.study_field)
        .bind(&application.instruction_language)
        .bind(&application.email)
        .bind(&application.gender)
        .bind(application.date_of_birth)
        .bind(application.gpa)
        .bind(&application.current_country)
        .bind(&application.preferred_intake)
        .bind(&application.notes)
        .bind(application.scholarship_interest)
        .bind(&application.profile_picture_url)
        .bind(Json(&application.documents_urls))
        .bind(ApplicationStatus::default())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(application_id = %id, "Application inserted");

        Ok(id)
    }

    #[tracing::instrument(skip(self), fields(db.table = "applications"))]
    async fn get_by_id(&self, id: Uuid) -> Result<Option<ApplicationRecord>, AppError> {
        let row: Option<ApplicationRow> = sqlx::query_as::<Postgres, ApplicationRow>(
            r#"
            SELECT id, full_name, nationality, contact_number, education_level,
                   study_field, instruction_language, email, gender,
                   date_of_birth, gpa, current_country, preferred_intake,
                   notes, scholarship_interest, profile_picture_url,
                   documents_urls, status, submitted_at
            FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ApplicationRow::into_record))
    }
}
