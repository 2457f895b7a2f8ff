//! Shared key generation for storage backends.
//!
//! Key format: `{category-path}/{timestamp}-{token}.{ext}`, where the
//! timestamp is epoch milliseconds and the token is random alphanumeric.

use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::Rng;
use studygate_core::models::UploadCategory;

const TOKEN_LEN: usize = 10;

/// Generate a collision-resistant storage key for one selected file.
///
/// The original filename contributes only its extension; two concurrent
/// submissions selecting files with identical names get distinct keys.
/// Files without an extension get no trailing dot.
pub fn generate_storage_key(category: UploadCategory, original_filename: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect();

    match extension(original_filename) {
        Some(ext) => format!("{}/{}-{}.{}", category.path_prefix(), timestamp, token, ext),
        None => format!("{}/{}-{}", category.path_prefix(), timestamp, token),
    }
}

fn extension(filename: &str) -> Option<&str> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
}
