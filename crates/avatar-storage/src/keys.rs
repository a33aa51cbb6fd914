//! Shared key handling for storage backends.

use crate::traits::{StorageError, StorageResult};
use uuid::Uuid;

/// Reject keys that could escape the storage root or address nothing.
/// Empty segments count as invalid; object stores collapse `a//b` to `a/b`.
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("Storage key is empty".to_string()));
    }
    if key
        .split('/')
        .any(|segment| segment.is_empty() || segment == "..")
    {
        return Err(StorageError::InvalidKey(format!(
            "Storage key contains invalid path segments: {}",
            key
        )));
    }
    Ok(())
}

/// Final key for a put: the requested key, or the key with a random suffix
/// inserted before the extension of its last segment.
pub fn resolve_key(key: &str, add_random_suffix: bool) -> String {
    if add_random_suffix {
        with_suffix(key, &Uuid::new_v4().simple().to_string())
    } else {
        key.to_string()
    }
}

/// `avatars/u/profile.png` + `abc` -> `avatars/u/profile-abc.png`
pub fn with_suffix(key: &str, suffix: &str) -> String {
    let (dir, file) = match key.rfind('/') {
        Some(idx) => key.split_at(idx + 1),
        None => ("", key),
    };

    match file.rfind('.') {
        Some(dot) if dot > 0 => format!("{}{}-{}{}", dir, &file[..dot], suffix, &file[dot..]),
        _ => format!("{}{}-{}", dir, file, suffix),
    }
}

/// Percent-encode each segment of a key for use in a public URL.
pub fn url_path(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
