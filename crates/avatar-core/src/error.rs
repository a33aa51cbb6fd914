//! Error types module
//!
//! All failures the upload endpoint can surface are unified under `AppError`.
//! Each variant describes its own HTTP status, client message and log level
//! through `ErrorMetadata`, so the API layer renders them uniformly.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected client mistakes
    Debug,
    /// Warning level - for rejected but well-formed requests
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR"), used in logs
    fn error_code(&self) -> &'static str;

    /// Client-facing message placed in the `error` field of the body
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Failure while consuming the request body.
    #[error("Body read error: {0}")]
    BodyRead(String),

    /// Failure reported by the blob storage backend.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Variant name, for structured logs
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MethodNotAllowed => "MethodNotAllowed",
            AppError::BodyRead(_) => "BodyRead",
            AppError::Storage(_) => "Storage",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::MethodNotAllowed => 405,
            AppError::BodyRead(_) | AppError::Storage(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            AppError::BodyRead(_) => "BODY_READ_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// The underlying message is passed through unchanged, so storage failures
    /// reach the caller exactly as the backend reported them.
    fn client_message(&self) -> String {
        match self {
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
            AppError::BodyRead(msg) | AppError::Storage(msg) => msg.clone(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::MethodNotAllowed => LogLevel::Debug,
            _ => LogLevel::Error,
        }
    }
}
