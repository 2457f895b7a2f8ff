//! Required-field validation for draft snapshots.
//!
//! This runs before any network call; a snapshot with missing required
//! fields never reaches the storage or database layer.

use crate::models::draft::{DraftField, DraftSnapshot};

/// Required fields that are absent or whitespace-only in the snapshot, in
/// declaration order. An empty result means the snapshot may proceed to the
/// upload phase.
pub fn missing_required_fields(snapshot: &DraftSnapshot) -> Vec<DraftField> {
    DraftField::REQUIRED
        .into_iter()
        .filter(|field| snapshot.text(*field).is_none())
        .collect()
}
