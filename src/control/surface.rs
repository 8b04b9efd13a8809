//! Top-level input surface.
//!
//! During a drag the seek bar listens on the outermost surface, not only on
//! its own element, so pointer movement and release keep arriving after the
//! pointer leaves the bar. Registration can be refused when the control is
//! embedded behind an isolation boundary.

use std::collections::BTreeSet;
use std::fmt;

use super::error::SurfaceError;

/// Pointer listeners the seek bar registers while scrubbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 2] = [ListenerKind::PointerMove, ListenerKind::PointerUp];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PointerMove => "pointermove",
            Self::PointerUp => "pointerup",
        }
    }
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The outermost context that receives pointer events anywhere on screen.
pub trait InputSurface {
    /// Start routing `kind` events to the seek bar.
    fn add_listener(&mut self, kind: ListenerKind) -> Result<(), SurfaceError>;

    /// Stop routing `kind` events to the seek bar.
    fn remove_listener(&mut self, kind: ListenerKind) -> Result<(), SurfaceError>;
}

/// Listener registry for hosts that dispatch events themselves.
///
/// The host asks [`TopLevelSurface::is_listening`] before forwarding a
/// pointer event that landed outside the bar. A restricted surface refuses
/// every registration, which models an embedded player whose hosting
/// document cannot be reached.
#[derive(Debug, Clone, Default)]
pub struct TopLevelSurface {
    listening: BTreeSet<ListenerKind>,
    restricted: bool,
    /// Number of `add_listener` calls, successful or not
    pub attach_attempts: usize,
    /// Number of `remove_listener` calls, successful or not
    pub detach_attempts: usize,
}

impl TopLevelSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface behind an embedding boundary.
    pub fn restricted() -> Self {
        Self {
            restricted: true,
            ..Self::default()
        }
    }

    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    /// Whether events of `kind` should be forwarded to the seek bar.
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listening.contains(&kind)
    }

    /// Number of listeners currently registered.
    pub fn active_listeners(&self) -> usize {
        self.listening.len()
    }
}

impl InputSurface for TopLevelSurface {
    fn add_listener(&mut self, kind: ListenerKind) -> Result<(), SurfaceError> {
        self.attach_attempts += 1;
        if self.restricted {
            return Err(SurfaceError::BoundaryRestricted { kind });
        }
        self.listening.insert(kind);
        Ok(())
    }

    fn remove_listener(&mut self, kind: ListenerKind) -> Result<(), SurfaceError> {
        self.detach_attempts += 1;
        if self.restricted {
            return Err(SurfaceError::BoundaryRestricted { kind });
        }
        self.listening.remove(&kind);
        Ok(())
    }
}
