//! Error types for Cockpit.

use std::fmt;
use thiserror::Error;

/// Failure classes of the remote usage endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageErrorCode {
    Auth,
    RateLimit,
    Http(u16),
    Parse,
    Network,
    Timeout,
}

impl fmt::Display for UsageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageErrorCode::Auth => f.write_str("AUTH_ERROR"),
            UsageErrorCode::RateLimit => f.write_str("RATE_LIMIT"),
            UsageErrorCode::Http(status) => write!(f, "HTTP_{}", status),
            UsageErrorCode::Parse => f.write_str("PARSE_ERROR"),
            UsageErrorCode::Network => f.write_str("NETWORK_ERROR"),
            UsageErrorCode::Timeout => f.write_str("TIMEOUT"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CockpitError {
    #[error("Git command failed: {0}")]
    GitFailed(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Usage API error [{code}]: {message}")]
    UsageApi {
        code: UsageErrorCode,
        message: String,
    },

    #[error("Command timed out after {0}ms")]
    Timeout(u64),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CockpitError {
    pub(crate) fn usage(code: UsageErrorCode, message: impl Into<String>) -> Self {
        CockpitError::UsageApi {
            code,
            message: message.into(),
        }
    }
}
