//! Error types for moosup operations.
//!
//! This module defines [`MoosupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MoosupError` for domain-specific errors that need distinct exit codes
//! - Use `anyhow::Error` (via `MoosupError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use thiserror::Error;

/// Core error type for moosup operations.
#[derive(Debug, Error)]
pub enum MoosupError {
    /// The Linux distribution could not be identified or is not supported.
    #[error("Unsupported distribution: {id}")]
    UnsupportedDistro { id: String },

    /// No supported release file was found on this system.
    #[error("Could not detect a Linux distribution (no os-release file found)")]
    DistroNotDetected,

    /// Running without root and without a usable sudo.
    #[error("Insufficient privileges: {message}")]
    MissingPrivileges { message: String },

    /// The package manager selected for the distro is not on PATH.
    #[error("Package manager '{manager}' not found on PATH")]
    PackageManagerNotFound { manager: String },

    /// Shell command failed to spawn or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MoosupError {
    /// Process exit code associated with this error.
    ///
    /// 2 unsupported distro, 3 missing privileges, 4 missing package
    /// manager, 1 everything else. Partial install failure (5) is not an
    /// error variant; the install command reports it as a failure result.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnsupportedDistro { .. } | Self::DistroNotDetected => 2,
            Self::MissingPrivileges { .. } => 3,
            Self::PackageManagerNotFound { .. } => 4,
            Self::CommandFailed { .. } | Self::Io(_) | Self::Other(_) => 1,
        }
    }
}

/// Result type alias for moosup operations.
pub type Result<T> = std::result::Result<T, MoosupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_distro_displays_id() {
        let err = MoosupError::UnsupportedDistro {
            id: "gentoo".into(),
        };
        assert!(err.to_string().contains("gentoo"));
    }

    #[test]
    fn unsupported_distro_exit_code() {
        let err = MoosupError::UnsupportedDistro { id: "slack".into() };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn not_detected_exit_code() {
        assert_eq!(MoosupError::DistroNotDetected.exit_code(), 2);
    }

    #[test]
    fn missing_privileges_exit_code() {
        let err = MoosupError::MissingPrivileges {
            message: "run as root or install sudo".into(),
        };
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("sudo"));
    }

    #[test]
    fn package_manager_not_found_exit_code() {
        let err = MoosupError::PackageManagerNotFound {
            manager: "dnf".into(),
        };
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("dnf"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = MoosupError::CommandFailed {
            command: "apt-get update".into(),
            code: Some(100),
        };
        let msg = err.to_string();
        assert!(msg.contains("apt-get update"));
        assert!(msg.contains("100"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: MoosupError = io_err.into();
        assert!(matches!(err, MoosupError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(MoosupError::DistroNotDetected)
        }
        assert!(returns_error().is_err());
    }
}
