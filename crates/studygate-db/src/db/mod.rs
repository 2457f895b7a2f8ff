//! Database repositories for data access layer
//!
//! The submission pipeline only ever inserts into the applications table and
//! reads records back for the candidate's own view; there is no update or
//! delete path here.

pub mod applications;

pub use applications::{ApplicationRepository, ApplicationStore};
