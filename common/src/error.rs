//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `Status` の表示形式は `HTTP Error {code}: {reason}` に固定されており、
//! ゼロ除算ケースはこの文字列に `HTTP Error 406` が含まれることで判定する。

use thiserror::Error;

/// Check error type
#[derive(Debug, Error)]
pub enum CheckError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-200 response from the service under test
    #[error("HTTP Error {status}: {reason}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase (empty when unknown)
        reason: String,
    },

    /// Client-side timeout expired
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// HTTP transport error (connection refused, body read failure, ...)
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Response arrived but did not match the expectation
    #[error("Assertion failed: {0}")]
    Assertion(String),
}

impl CheckError {
    /// Builds a `Status` error, filling in the canonical reason phrase.
    pub fn status(url: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::Status {
            url: url.into(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for CheckError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result alias used across the workspace
pub type CheckResult<T> = Result<T, CheckError>;
