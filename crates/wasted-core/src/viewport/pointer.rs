use crate::geometry::Vec2;

/// Identifies one pointer (mouse, pen or touch contact) for capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// What the host should do with its pointer capture after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerResponse {
    /// Event did not affect the viewport.
    Ignored,
    /// Drag started: route further events for this pointer to the viewport.
    Capture(PointerId),
    /// Offset moved while dragging.
    Panned,
    /// Drag ended: release the capture taken on `Capture`.
    Release(PointerId),
}

/// An in-flight drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer: PointerId,
    /// Pointer position at the previous move; deltas are taken from here.
    pub last: Vec2,
}
