#![forbid(unsafe_code)]

//! Canonical pointer-event types.
//!
//! The host windowing toolkit delivers pointer events with a position and a
//! modifier set. The toolkit, not this crate, decides what constitutes a
//! click: trackers that report a full press/release pair synthesize
//! [`PointerKind::Click`], and consumers gate hit-testing on it rather than
//! re-deriving click semantics from raw presses.

use bitflags::bitflags;

use crate::geometry::Point;

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// The kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A completed click (press and release on the same target).
    Click,

    /// Button pressed down.
    Press,

    /// Button released.
    Release,

    /// Pointer moved with no button involvement.
    Move,
}

/// A pointer event delivered by the host toolkit.
///
/// Delivered exactly once per physical event; carries no ownership beyond
/// its own scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The kind of pointer event.
    pub kind: PointerKind,

    /// Position in container-local pixels.
    pub point: Point,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event with no modifiers.
    #[must_use]
    pub const fn new(kind: PointerKind, point: Point) -> Self {
        Self {
            kind,
            point,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a click event at the given position.
    #[must_use]
    pub const fn click(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Click, Point::new(x, y))
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if this event qualifies as a click.
    #[must_use]
    pub const fn is_click(&self) -> bool {
        matches!(self.kind, PointerKind::Click)
    }
}

#[cfg(test)]
mod tests {
    use super::{Modifiers, PointerEvent, PointerKind};
    use crate::geometry::Point;

    #[test]
    fn click_constructor() {
        let ev = PointerEvent::click(5, -3);
        assert_eq!(ev.kind, PointerKind::Click);
        assert_eq!(ev.point, Point::new(5, -3));
        assert_eq!(ev.modifiers, Modifiers::NONE);
        assert!(ev.is_click());
    }

    #[test]
    fn move_is_not_a_click() {
        let ev = PointerEvent::new(PointerKind::Move, Point::ZERO);
        assert!(!ev.is_click());
        let ev = PointerEvent::new(PointerKind::Press, Point::ZERO);
        assert!(!ev.is_click());
    }

    #[test]
    fn modifiers_combine() {
        let mods = Modifiers::SHIFT | Modifiers::CTRL;
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::ALT));
        let ev = PointerEvent::click(0, 0).with_modifiers(mods);
        assert_eq!(ev.modifiers, mods);
    }
}
