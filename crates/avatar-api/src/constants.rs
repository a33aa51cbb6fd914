/// Raw-body avatar upload route.
pub const UPLOAD_AVATAR_PATH: &str = "/api/upload-avatar";

/// Liveness probe route.
pub const HEALTH_PATH: &str = "/health";

/// Query parameter naming the user whose avatar is uploaded.
pub const UID_QUERY_PARAM: &str = "uid";
