use std::path::PathBuf;

use crate::id::{SurfaceId, WindowId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures crossing the host boundary.
///
/// Returned by host proxy futures. Callers that dispatch fire-and-forget
/// never see these; the dispatcher logs them instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("host channel closed")]
    ChannelClosed,

    #[error("host dropped the request without replying")]
    NoReply,

    #[error("unknown host window: {0}")]
    UnknownWindow(WindowId),

    #[error("unknown surface: {0}")]
    UnknownSurface(SurfaceId),

    #[error("script error: {0}")]
    Script(String),

    #[error("empty find query")]
    EmptyQuery,

    #[error("host command queue full")]
    QueueFull,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("host.queue_capacity out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: host.queue_capacity out of range"
        );
    }

    #[test]
    fn host_error_display() {
        assert_eq!(HostError::ChannelClosed.to_string(), "host channel closed");
        assert_eq!(
            HostError::NoReply.to_string(),
            "host dropped the request without replying"
        );

        let err = HostError::UnknownWindow(WindowId(42));
        assert_eq!(err.to_string(), "unknown host window: window-42");

        let err = HostError::UnknownSurface(SurfaceId::from("frame-a"));
        assert_eq!(err.to_string(), "unknown surface: frame-a");

        let err = HostError::Script("window.find is not a function".into());
        assert_eq!(
            err.to_string(),
            "script error: window.find is not a function"
        );

        assert_eq!(HostError::EmptyQuery.to_string(), "empty find query");
        assert_eq!(HostError::QueueFull.to_string(), "host command queue full");
    }
}
