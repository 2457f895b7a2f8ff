//! Domain models

pub mod application;
pub mod draft;

pub use application::{ApplicationRecord, ApplicationStatus, NewApplication};
pub use draft::{Draft, DraftField, DraftSnapshot, FieldValue, LocalFile, UploadCategory};
