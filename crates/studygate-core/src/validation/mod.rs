//! Validation modules

pub mod required;

pub use required::missing_required_fields;
