use crate::advisor::catalog::KnowledgeBaseError;
use crate::advisor::service::AdvisorServiceError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Vocabulary {
        path: PathBuf,
        source: std::io::Error,
    },
    KnowledgeBase(KnowledgeBaseError),
    Advisor(AdvisorServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Vocabulary { path, source } => write!(
                f,
                "failed to load label vocabulary from {}: {}",
                path.display(),
                source
            ),
            AppError::KnowledgeBase(err) => write!(f, "knowledge base error: {}", err),
            AppError::Advisor(err) => write!(f, "advisor error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Vocabulary { source, .. } => Some(source),
            AppError::KnowledgeBase(err) => Some(err),
            AppError::Advisor(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<KnowledgeBaseError> for AppError {
    fn from(value: KnowledgeBaseError) -> Self {
        Self::KnowledgeBase(value)
    }
}

impl From<AdvisorServiceError> for AppError {
    fn from(value: AdvisorServiceError) -> Self {
        Self::Advisor(value)
    }
}
