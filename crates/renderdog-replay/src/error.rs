use thiserror::Error;

use crate::types::ReplayStatus;

/// Failures raised by the wrapper itself, as opposed to values the engine returns.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to load replay library: {0}")]
    LoadLibrary(String),

    #[error("replay library is not loaded in the current process")]
    NotLoaded,

    #[error("required export is missing from replay library: {0}")]
    MissingFunction(&'static str),

    #[error("engine interface {0} is not available from this engine")]
    InterfaceUnavailable(&'static str),

    #[error("engine reported {0}")]
    Status(#[from] ReplayStatus),
}

impl ReplayError {
    /// Status to report across a C boundary that only speaks [`ReplayStatus`].
    pub fn status(&self) -> ReplayStatus {
        match self {
            ReplayError::Status(status) => *status,
            ReplayError::LoadLibrary(_) | ReplayError::NotLoaded => ReplayStatus::FileNotFound,
            ReplayError::MissingFunction(_) => ReplayStatus::ApiIncompatibleVersion,
            ReplayError::InterfaceUnavailable(_) => ReplayStatus::ApiUnsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_keep_their_status() {
        let err = ReplayError::from(ReplayStatus::NetworkVersionMismatch);
        assert_eq!(err.status(), ReplayStatus::NetworkVersionMismatch);
        assert_eq!(err.to_string(), "engine reported remote server version mismatch");
    }

    #[test]
    fn wrapper_errors_map_to_the_closest_status() {
        assert_eq!(
            ReplayError::InterfaceUnavailable("ICaptureFile").status(),
            ReplayStatus::ApiUnsupported
        );
        assert_eq!(
            ReplayError::MissingFunction("RENDERDOC_HalfToFloat").status(),
            ReplayStatus::ApiIncompatibleVersion
        );
    }
}
