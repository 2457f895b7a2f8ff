//! StudyGate Database Library
//!
//! Data access layer for the applications table: the `ApplicationStore`
//! trait consumed by the submission orchestrator, its Postgres
//! implementation, and pool construction.

pub mod db;
pub mod pool;

pub use db::{ApplicationRepository, ApplicationStore};
pub use pool::{connect, run_migrations};
