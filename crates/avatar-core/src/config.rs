//! Configuration module
//!
//! Settings are read from the process environment (with `.env` support) once at
//! startup and validated before the server binds.

use std::env;
use std::str::FromStr;

use crate::storage_types::StorageBackend;

const SERVER_PORT: u16 = 3000;

/// Settings every deployment carries regardless of storage backend
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
    /// `json` for structured log lines, anything else for compact console output
    pub log_format: String,
}

/// Avatar service configuration
#[derive(Clone, Debug)]
pub struct AvatarServiceConfig {
    pub base: BaseConfig,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, R2, ...)
    pub s3_public_base_url: Option<String>,
    pub aws_region: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    /// Upper bound on the raw request body. `None` leaves the body unbounded.
    pub max_upload_size_bytes: Option<usize>,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<AvatarServiceConfig>);

impl Config {
    fn as_service(&self) -> &AvatarServiceConfig {
        &self.0
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = AvatarServiceConfig::from_lookup(|key| env::var(key).ok())?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_service().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.as_service().base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.as_service().base.environment
    }

    pub fn log_format(&self) -> &str {
        &self.as_service().base.log_format
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.as_service().storage_backend
    }

    pub fn s3_bucket(&self) -> Option<&str> {
        self.as_service().s3_bucket.as_deref()
    }

    /// `S3_REGION`, falling back to `AWS_REGION`
    pub fn s3_region(&self) -> Option<&str> {
        self.as_service()
            .s3_region
            .as_deref()
            .or(self.as_service().aws_region.as_deref())
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.as_service().s3_endpoint.as_deref()
    }

    pub fn s3_public_base_url(&self) -> Option<&str> {
        self.as_service().s3_public_base_url.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.as_service().local_storage_path.as_deref()
    }

    pub fn local_storage_base_url(&self) -> Option<&str> {
        self.as_service().local_storage_base_url.as_deref()
    }

    pub fn max_upload_size_bytes(&self) -> Option<usize> {
        self.as_service().max_upload_size_bytes
    }
}

/// Parse an optional numeric variable; a set but malformed value is an error.
fn parse_var<T>(key: &str, value: Option<String>) -> Result<Option<T>, anyhow::Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{} has invalid value '{}': {}", key, raw, e)),
        None => Ok(None),
    }
}

/// Treat empty strings the same as unset variables.
fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl AvatarServiceConfig {
    /// Build the configuration from a variable lookup (the process environment
    /// in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = non_empty(lookup("ENVIRONMENT"))
            .or_else(|| non_empty(lookup("APP_ENV")))
            .unwrap_or_else(|| "development".to_string());

        let server_port = match parse_var::<u16>("PORT", lookup("PORT"))? {
            Some(port) => port,
            None => parse_var::<u16>("SERVER_PORT", lookup("SERVER_PORT"))?.unwrap_or(SERVER_PORT),
        };

        let log_format = non_empty(lookup("LOG_FORMAT"))
            .map(|f| f.to_lowercase())
            .unwrap_or_else(|| "compact".to_string());

        let storage_backend = match non_empty(lookup("STORAGE_BACKEND")) {
            Some(raw) => raw.parse::<StorageBackend>()?,
            None => StorageBackend::S3,
        };

        let max_upload_size_bytes =
            parse_var::<usize>("MAX_UPLOAD_SIZE_BYTES", lookup("MAX_UPLOAD_SIZE_BYTES"))?;

        Ok(AvatarServiceConfig {
            base: BaseConfig {
                server_port,
                environment,
                log_format,
            },
            storage_backend,
            s3_bucket: non_empty(lookup("S3_BUCKET")),
            s3_region: non_empty(lookup("S3_REGION")),
            s3_endpoint: non_empty(lookup("S3_ENDPOINT")),
            s3_public_base_url: non_empty(lookup("S3_PUBLIC_BASE_URL")),
            aws_region: non_empty(lookup("AWS_REGION")),
            local_storage_path: non_empty(lookup("LOCAL_STORAGE_PATH")),
            local_storage_base_url: non_empty(lookup("LOCAL_STORAGE_BASE_URL")),
            max_upload_size_bytes,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_BUCKET must be set when using S3 storage backend"
                    ));
                }
                if self.s3_region.is_none() && self.aws_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set when using S3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using local storage backend"
                    ));
                }
                if self.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_BASE_URL must be set when using local storage backend"
                    ));
                }
            }
        }

        if self.max_upload_size_bytes == Some(0) {
            return Err(anyhow::anyhow!(
                "MAX_UPLOAD_SIZE_BYTES must be greater than zero when set"
            ));
        }

        Ok(())
    }
}
