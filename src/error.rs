use std::fmt;
use std::io;
use std::path::PathBuf;

/// Load-pass error
///
/// Returned by the loader and by introspection. The load pass runs once at
/// process start; every failure surfaces immediately and nothing is retried.
/// Mounts performed before the failure stay in effect.
#[derive(Debug)]
pub enum Error {
    /// The controllers root (or a subdirectory) could not be read
    ///
    /// Fatal for the remaining traversal. Already-performed mounts are not
    /// rolled back.
    Filesystem {
        /// Directory that failed to read
        path: PathBuf,
        source: io::Error,
    },
    /// A discovered file could not be resolved to a controller
    ///
    /// The file matched the candidacy check but the registry holds no
    /// factory for it. Aborts the whole load pass; there is no per-module
    /// catch-and-continue.
    ModuleLoad {
        /// Discovered file
        path: PathBuf,
        reason: String,
    },
    /// A mounted router handle does not expose its binding table
    ///
    /// Introspection requires an enumerable binding list. A handle that
    /// hides it is a programming error in the supplied router, not a
    /// recoverable condition.
    MalformedRouter {
        /// Mount path of the offending handle
        mount_path: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Filesystem { path, source } => {
                write!(f, "failed to read directory '{}': {}", path.display(), source)
            }
            Error::ModuleLoad { path, reason } => {
                write!(
                    f,
                    "failed to load controller '{}': {}",
                    path.display(),
                    reason
                )
            }
            Error::MalformedRouter { mount_path } => {
                write!(
                    f,
                    "router mounted at '{}' does not expose its binding table",
                    mount_path
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Filesystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_error_carries_source() {
        let err = Error::Filesystem {
            path: PathBuf::from("/missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("/missing"));
    }

    #[test]
    fn test_malformed_router_message_names_mount() {
        let err = Error::MalformedRouter {
            mount_path: "/api".into(),
        };
        assert!(err.to_string().contains("/api"));
    }
}
