use thiserror::Error;

use crate::errors::domain::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Decode error: {detail}")]
    Decode { detail: String },
    #[error("Transport error: {detail}")]
    Transport {
        detail: String,
        status: Option<u16>,
    },
    #[error("Domain error: {0}")]
    Domain(DomainError),
    #[error("I/O error: {detail}")]
    Io { detail: String },
}

impl AppError {
    /// Stable machine-readable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Decode { .. } => "DECODE_ERROR",
            AppError::Transport { .. } => "TRANSPORT_ERROR",
            AppError::Domain(_) => "DOMAIN_ERROR",
            AppError::Io { .. } => "IO_ERROR",
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self::Decode {
            detail: detail.into(),
        }
    }

    pub fn transport(detail: impl Into<String>, status: Option<u16>) -> Self {
        Self::Transport {
            detail: detail.into(),
            status,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Domain(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::decode(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        AppError::transport(err.to_string(), status)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io {
            detail: err.to_string(),
        }
    }
}
