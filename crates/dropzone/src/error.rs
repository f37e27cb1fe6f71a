//! Error types for configuring drop targets.

/// Errors raised while interpreting drop-target configuration.
///
/// Runtime drag handling never fails; these only come from turning
/// host-supplied names into typed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTargetError {
    /// Direction name is not one of `above`, `below`, `left`, `right`, `within`.
    InvalidDirection(String),
    /// Zone name is not one of `top`, `bottom`, `left`, `right`, `center`.
    InvalidZone(String),
    /// Size unit is not `pixels` or `percentage`.
    InvalidSizeUnit(String),
}

impl std::fmt::Display for DropTargetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropTargetError::InvalidDirection(name) => write!(f, "invalid direction {}", name),
            DropTargetError::InvalidZone(name) => write!(f, "invalid drop zone {}", name),
            DropTargetError::InvalidSizeUnit(name) => write!(f, "invalid size unit {}", name),
        }
    }
}

impl std::error::Error for DropTargetError {}

/// Result type for drop-target configuration.
pub type DropTargetResult<T> = Result<T, DropTargetError>;
