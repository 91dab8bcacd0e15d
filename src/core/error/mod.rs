use thiserror::Error;

use crate::core::types::EngineKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("malformed configuration document: {message}")]
    MalformedDocument { message: String },
    #[error("missing provider section: {section}")]
    MissingSection { section: String },
    #[error("missing field {field} in provider section {section}")]
    MissingField { section: String, field: String },
    #[error("unsupported chat model: {model}")]
    UnsupportedChatModel { model: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineInitError {
    #[error("invalid credentials for engine {engine}: {reason}")]
    InvalidCredentials { engine: EngineKind, reason: String },
    #[error("engine {engine} rejected settings: {reason}")]
    InvalidSettings { engine: EngineKind, reason: String },
}

impl EngineInitError {
    pub fn engine(&self) -> EngineKind {
        match self {
            Self::InvalidCredentials { engine, .. } | Self::InvalidSettings { engine, .. } => {
                *engine
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("engine transport error [engine={engine}]: {message}")]
    Transport { engine: EngineKind, message: String },
    #[error("engine credentials rejected [engine={engine}]: {message}")]
    CredentialsRejected { engine: EngineKind, message: String },
    #[error("engine quota exceeded [engine={engine}]: {message}")]
    QuotaExceeded { engine: EngineKind, message: String },
    #[error("engine protocol error [engine={engine}]: {message}")]
    Protocol { engine: EngineKind, message: String },
}

impl EngineError {
    pub fn engine(&self) -> EngineKind {
        match self {
            Self::Transport { engine, .. }
            | Self::CredentialsRejected { engine, .. }
            | Self::QuotaExceeded { engine, .. }
            | Self::Protocol { engine, .. } => *engine,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineFailure {
    pub engine: EngineKind,
    pub message: String,
}

impl From<EngineError> for EngineFailure {
    fn from(error: EngineError) -> Self {
        Self {
            engine: error.engine(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("no translation engines are configured")]
    NoEngines,
    #[error(
        "all translation engines failed{summary}",
        summary = format_failures(.failures)
    )]
    AllEnginesFailed { failures: Vec<EngineFailure> },
    #[error("translation cancelled before completion")]
    Cancelled,
}

fn format_failures(failures: &[EngineFailure]) -> String {
    if failures.is_empty() {
        return String::new();
    }

    let rendered: Vec<String> = failures
        .iter()
        .map(|failure| format!("{}: {}", failure.engine, failure.message))
        .collect();

    format!(" [{}]", rendered.join("; "))
}
