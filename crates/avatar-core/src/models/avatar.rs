//! Avatar upload request model and storage key derivation.

use serde::{Deserialize, Serialize};

/// User id used when the request carries no `uid` query parameter.
pub const DEFAULT_UID: &str = "unknown";

/// Content type assumed when the request has no `Content-Type` header.
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Prefix under which every avatar object is stored.
pub const AVATAR_KEY_PREFIX: &str = "avatars";

/// The per-request facts the upload handler derives before touching storage.
///
/// Any content type other than exactly `image/png` is stored with a `jpg`
/// extension, including unknown and malformed values. The derived content
/// type is still passed to storage verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub uid: String,
    pub content_type: String,
    pub extension: &'static str,
}

impl AvatarUpload {
    /// Build an upload from the raw `uid` query value and `Content-Type` header.
    pub fn from_request_parts(uid: Option<&str>, content_type_header: Option<&str>) -> Self {
        let uid = uid.unwrap_or(DEFAULT_UID).to_string();
        let content_type = content_type_header
            .map(media_type)
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let extension = extension_for(&content_type);

        Self {
            uid,
            content_type,
            extension,
        }
    }

    /// `avatars/{uid}/profile.{ext}`
    pub fn storage_key(&self) -> String {
        format!(
            "{}/{}/profile.{}",
            AVATAR_KEY_PREFIX, self.uid, self.extension
        )
    }
}

/// Strip parameters such as `; charset=...` from a content type header value.
pub fn media_type(header_value: &str) -> &str {
    header_value.split(';').next().unwrap_or(header_value)
}

/// Map a content type to the stored file extension.
pub fn extension_for(content_type: &str) -> &'static str {
    if content_type == "image/png" {
        "png"
    } else {
        "jpg"
    }
}

/// Successful upload body: `{"url": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_upload_key() {
        let upload = AvatarUpload::from_request_parts(Some("alice"), Some("image/png"));
        assert_eq!(upload.storage_key(), "avatars/alice/profile.png");
        assert_eq!(upload.content_type, "image/png");
    }

    #[test]
    fn test_missing_uid_defaults_to_unknown() {
        let upload = AvatarUpload::from_request_parts(None, Some("image/jpeg"));
        assert_eq!(upload.storage_key(), "avatars/unknown/profile.jpg");
    }

    #[test]
    fn test_missing_content_type_defaults_to_jpeg() {
        let upload = AvatarUpload::from_request_parts(Some("bob"), None);
        assert_eq!(upload.content_type, DEFAULT_CONTENT_TYPE);
        assert_eq!(upload.extension, "jpg");
    }

    #[test]
    fn test_unrecognized_content_type_falls_back_to_jpg() {
        let upload = AvatarUpload::from_request_parts(Some("carol"), Some("image/gif"));
        assert_eq!(upload.storage_key(), "avatars/carol/profile.jpg");
        // The content type itself is not rewritten
        assert_eq!(upload.content_type, "image/gif");
    }

    #[test]
    fn test_content_type_parameters_are_stripped() {
        let upload = AvatarUpload::from_request_parts(Some("dave"), Some("image/png; charset=binary"));
        assert_eq!(upload.content_type, "image/png");
        assert_eq!(upload.extension, "png");
    }

    #[test]
    fn test_empty_content_type_is_kept_and_stored_as_jpg() {
        let upload = AvatarUpload::from_request_parts(Some("erin"), Some(""));
        assert_eq!(upload.content_type, "");
        assert_eq!(upload.extension, "jpg");
    }

    #[test]
    fn test_png_match_is_exact() {
        assert_eq!(extension_for("IMAGE/PNG"), "jpg");
        assert_eq!(extension_for("image/png "), "jpg");
        assert_eq!(extension_for("image/png"), "png");
    }

    #[test]
    fn test_upload_response_shape() {
        let body = serde_json::to_value(UploadResponse {
            url: "https://blob.example/avatars/a/profile.jpg".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "url": "https://blob.example/avatars/a/profile.jpg" })
        );
    }
}
