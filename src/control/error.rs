//! Progress control errors.

use super::surface::ListenerKind;

/// Failure to register or remove a listener on the top-level input surface.
///
/// Always absorbed by the scrub state machine; exposed so surfaces and their
/// test doubles can report it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("top-level surface is behind an embedding boundary ({kind} listener refused)")]
    BoundaryRestricted { kind: ListenerKind },

    #[error("top-level surface is unavailable: {0}")]
    Unavailable(String),
}
