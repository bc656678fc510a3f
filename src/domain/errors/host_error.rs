//! Configuration host error types.

use thiserror::Error;

/// Failures of a configuration-injection host adapter.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum HostError {
    #[error("host was already initialized")]
    AlreadyInitialized,

    #[error("host io error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed config update: {message}")]
    MalformedUpdate { message: String },

    #[error("failed to publish edit panel values: {message}")]
    PublishFailed { message: String },
}

impl HostError {
    /// Creates an IO error for `path`.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed update error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedUpdate {
            message: message.into(),
        }
    }

    /// Creates a publish error.
    #[must_use]
    pub fn publish_failed(message: impl Into<String>) -> Self {
        Self::PublishFailed {
            message: message.into(),
        }
    }

    /// Whether the host can keep running after this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedUpdate { .. } | Self::PublishFailed { .. } | Self::Io { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = HostError::malformed("expected value at line 1");
        assert_eq!(
            err.to_string(),
            "malformed config update: expected value at line 1"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(HostError::io("/tmp/x", "denied").is_recoverable());
        assert!(!HostError::AlreadyInitialized.is_recoverable());
    }
}
