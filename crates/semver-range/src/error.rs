use thiserror::Error;

/// Error type for version and range parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error("Invalid version string \"{version}\": {reason}")]
    InvalidVersion { version: String, reason: String },
    #[error("Invalid range \"{range}\": {reason}")]
    InvalidRange { range: String, reason: String },
}

impl SemverError {
    pub(crate) fn invalid_version(version: &str, reason: impl Into<String>) -> Self {
        SemverError::InvalidVersion {
            version: version.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_range(range: &str, reason: impl Into<String>) -> Self {
        SemverError::InvalidRange {
            range: range.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SemverError>;
