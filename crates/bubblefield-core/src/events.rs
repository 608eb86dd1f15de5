// crates/bubblefield-core/src/events.rs
use glam::Vec2;

use crate::Rect;

/// Pan gesture events fed to the controller by the host input system.
///
/// Points are in viewport coordinates. The host serializes gestures; at most
/// one drag is active at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Start { position: Vec2 },
    Move { position: Vec2 },
    End,
    /// The gesture was taken over by the system (e.g. a navigation swipe).
    /// Handled like `End` so a drag can never be left hanging.
    Cancel,
}

/// Outbound events queued by the controller and drained by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent<I> {
    /// The renderer reported a tap on a bubble; `frame` is the screen-space
    /// rectangle the renderer resolved for it, used to start transitions.
    ItemTapped { id: I, frame: Rect },
}
