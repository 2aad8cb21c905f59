// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum NumplanError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<NumplanError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, NumplanError>;

impl NumplanError {
    /// The error underneath any number of `Context` layers.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Process exit status for this error. A missing route list exits with 2.
    pub fn exit_status(&self) -> u8 {
        match self.root() {
            Self::Application(ApplicationError::RouteListMissing { .. }) => 2,
            _ => 1,
        }
    }
}

/// Domain-layer specific errors.
///
/// `InvalidRange` is always a caller-data problem. `InvariantViolation` means the
/// summarization engine broke one of its own preconditions and is a defect.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid range: {reason}")]
    InvalidRange { reason: String },

    #[error("Invariant violated in {operation}: {details}")]
    InvariantViolation { operation: &'static str, details: String },

    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },

    #[error("Unknown category: {value}")]
    UnknownCategory { value: String },
}

impl DomainError {
    pub fn invalid_range(reason: impl Into<String>) -> Self {
        Self::InvalidRange { reason: reason.into() }
    }

    pub fn invariant(operation: &'static str, details: impl Into<String>) -> Self {
        Self::InvariantViolation { operation, details: details.into() }
    }

    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("No numbering plan snapshots found in {location}")]
    NoSnapshots { location: String },

    #[error("Route list '{name}' needs to be created before provisioning route patterns")]
    RouteListMissing { name: String },

    #[error("Partition '{partition}' is not available: {reason}")]
    PartitionUnavailable { partition: String, reason: String },

    #[error("Pattern sink rejected '{pattern}' in partition '{partition}': {reason}")]
    SinkRejected {
        partition: String,
        pattern: String,
        reason: String,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} data: {details}")]
    SerializationError { format: String, details: String },

    #[error("Malformed dataset row in '{path}' (line {line}): {details}")]
    MalformedRecord { path: PathBuf, line: u64, details: String },

    #[error("File system operation failed: {operation} on '{path}': {source}")]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for NumplanError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for NumplanError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<csv::Error> for InfrastructureError {
    fn from(err: csv::Error) -> Self {
        Self::SerializationError {
            format: "CSV".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<csv::Error> for NumplanError {
    fn from(err: csv::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for NumplanError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<NumplanError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| NumplanError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| NumplanError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
