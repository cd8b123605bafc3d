use std::path::PathBuf;

use crate::types::GroupId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by the editor host's window-management API.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("host unavailable: {0}")]
    Unavailable(String),

    #[error("host rejected request: {0}")]
    Rejected(String),

    #[error("unknown editor group: {0}")]
    UnknownGroup(GroupId),
}

#[derive(Debug, thiserror::Error)]
pub enum GridFocusError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
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

        let err = ConfigError::ValidationError("settle.timeout_ms".into());
        assert_eq!(
            err.to_string(),
            "config validation error: settle.timeout_ms"
        );
    }

    #[test]
    fn host_error_display() {
        let err = HostError::Unavailable("extension host restarting".into());
        assert_eq!(err.to_string(), "host unavailable: extension host restarting");

        let err = HostError::UnknownGroup(GroupId(7));
        assert_eq!(err.to_string(), "unknown editor group: group-7");
    }

    #[test]
    fn gridfocus_error_from_host() {
        let err: GridFocusError = HostError::Rejected("bad layout".into()).into();
        assert!(matches!(err, GridFocusError::Host(_)));
        assert!(err.to_string().contains("bad layout"));
    }

    #[test]
    fn gridfocus_error_from_config() {
        let err: GridFocusError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, GridFocusError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn gridfocus_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GridFocusError = io_err.into();
        assert!(matches!(err, GridFocusError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
