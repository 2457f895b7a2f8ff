//! StudyGate Core Library
//!
//! This crate provides the core domain models, error types, configuration,
//! and validation shared across all StudyGate components.

pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use hooks::{
    EchoLocalizer, Localizer, Navigator, NoOpNavigator, NoOpNotifications, NoticeKind,
    Notifications, Route,
};
pub use storage_types::StorageBackend;
