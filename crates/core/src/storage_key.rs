//! Object storage key derivation for inspection photos.
//!
//! Keys follow the convention `inspections/{inspection_id}/{ts}_{filename}`
//! where `ts` is a Unix timestamp. Collision avoidance between two uploads
//! of the same filename is timestamp-based, matching the original upload
//! path scheme.

use crate::types::DbId;

/// Folder prefix for all inspection photo objects.
pub const PHOTO_KEY_PREFIX: &str = "inspections";

/// Fallback filename when the client supplied none (or only junk).
const DEFAULT_FILENAME: &str = "photo";

/// Maximum length of the sanitized filename component.
const MAX_FILENAME_LEN: usize = 120;

/// Derive the storage key for one uploaded photo.
///
/// # Examples
///
/// ```
/// use homecheck_core::storage_key::photo_storage_key;
///
/// assert_eq!(
///     photo_storage_key(42, 1700000000, "kitchen sink.jpg"),
///     "inspections/42/1700000000_kitchen_sink.jpg"
/// );
/// ```
pub fn photo_storage_key(inspection_id: DbId, unix_ts: i64, original_filename: &str) -> String {
    let filename = sanitize_filename(original_filename);
    format!("{PHOTO_KEY_PREFIX}/{inspection_id}/{unix_ts}_{filename}")
}

/// Reduce a client-supplied filename to a safe key component.
///
/// Keeps ASCII alphanumerics, `.`, `-`, and `_`; everything else becomes
/// `_`. Strips any path components the client may have sent and caps the
/// length so keys stay well under provider limits.
pub fn sanitize_filename(original: &str) -> String {
    // Drop directory components ("../../x.png", "C:\\photos\\x.png").
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .trim();

    let mut out: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    out.truncate(MAX_FILENAME_LEN);

    if out.trim_matches(['_', '.']).is_empty() {
        return DEFAULT_FILENAME.to_string();
    }
    out
}
