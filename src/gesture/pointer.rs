//! Input normalization.
//!
//! Mouse and touch input arrive in different shapes. Both are folded into a
//! single [`PointerEvent`] at the boundary so the drag tracker never needs to
//! know which device produced a movement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Gesture phase of a normalized pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    /// Pointer pressed / finger placed.
    Down,
    /// Pointer moved.
    Move,
    /// Pointer released / finger lifted.
    Up,
    /// The platform aborted the gesture.
    Cancel,
    /// The pointer left the tracked surface.
    Leave,
}

impl PointerPhase {
    /// True for every phase that ends a drag.
    #[must_use]
    pub const fn ends_drag(self) -> bool {
        matches!(self, PointerPhase::Up | PointerPhase::Cancel | PointerPhase::Leave)
    }
}

/// Device that produced a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A device-agnostic horizontal pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    /// Absolute horizontal client position in px.
    pub x: f32,
    pub source: PointerSource,
}

impl PointerEvent {
    /// Create a mouse-sourced event.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f32) -> Self {
        Self {
            phase,
            x,
            source: PointerSource::Mouse,
        }
    }

    #[must_use]
    pub const fn down(x: f32) -> Self {
        Self::new(PointerPhase::Down, x)
    }

    #[must_use]
    pub const fn moved(x: f32) -> Self {
        Self::new(PointerPhase::Move, x)
    }

    #[must_use]
    pub const fn up(x: f32) -> Self {
        Self::new(PointerPhase::Up, x)
    }

    /// Mark the event as touch-sourced.
    #[must_use]
    pub const fn from_touch(mut self) -> Self {
        self.source = PointerSource::Touch;
        self
    }
}

/// Raw mouse event kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseKind {
    Down,
    Move,
    Up,
    Leave,
}

/// Raw touch event kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchKind {
    Start,
    Move,
    End,
    Cancel,
}

/// Input as delivered by a host toolkit, before normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum RawInput {
    Mouse {
        kind: MouseKind,
        /// 0 = primary button.
        button: u16,
        client_x: f32,
    },
    Touch {
        kind: TouchKind,
        /// `clientX` of each changed touch point, first one is tracked.
        changed: SmallVec<[f32; 2]>,
    },
}

impl RawInput {
    /// Primary-button mouse event.
    #[must_use]
    pub fn mouse(kind: MouseKind, client_x: f32) -> Self {
        RawInput::Mouse {
            kind,
            button: 0,
            client_x,
        }
    }

    /// Single-point touch event.
    #[must_use]
    pub fn touch(kind: TouchKind, client_x: f32) -> Self {
        let mut changed = SmallVec::new();
        changed.push(client_x);
        RawInput::Touch { kind, changed }
    }

    /// Fold into a [`PointerEvent`].
    ///
    /// Returns `None` for input that never drives a swipe: secondary mouse
    /// buttons pressing or releasing, and touch events without points.
    #[must_use]
    pub fn normalize(&self) -> Option<PointerEvent> {
        match self {
            RawInput::Mouse {
                kind,
                button,
                client_x,
            } => {
                let phase = match kind {
                    MouseKind::Down if *button == 0 => PointerPhase::Down,
                    MouseKind::Up if *button == 0 => PointerPhase::Up,
                    MouseKind::Down | MouseKind::Up => return None,
                    MouseKind::Move => PointerPhase::Move,
                    MouseKind::Leave => PointerPhase::Leave,
                };
                Some(PointerEvent::new(phase, *client_x))
            }
            RawInput::Touch { kind, changed } => {
                let x = *changed.first()?;
                let phase = match kind {
                    TouchKind::Start => PointerPhase::Down,
                    TouchKind::Move => PointerPhase::Move,
                    TouchKind::End => PointerPhase::Up,
                    TouchKind::Cancel => PointerPhase::Cancel,
                };
                Some(PointerEvent::new(phase, x).from_touch())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_normalization() {
        let ev = RawInput::mouse(MouseKind::Down, 120.0).normalize().unwrap();
        assert_eq!(ev, PointerEvent::down(120.0));

        let ev = RawInput::mouse(MouseKind::Leave, 10.0).normalize().unwrap();
        assert_eq!(ev.phase, PointerPhase::Leave);
        assert!(ev.phase.ends_drag());
    }

    #[test]
    fn test_secondary_button_ignored() {
        let raw = RawInput::Mouse {
            kind: MouseKind::Down,
            button: 2,
            client_x: 50.0,
        };
        assert!(raw.normalize().is_none());
    }

    #[test]
    fn test_touch_normalization() {
        let ev = RawInput::touch(TouchKind::Start, 200.0).normalize().unwrap();
        assert_eq!(ev.phase, PointerPhase::Down);
        assert_eq!(ev.source, PointerSource::Touch);
        assert_eq!(ev.x, 200.0);

        let ev = RawInput::touch(TouchKind::Cancel, 0.0).normalize().unwrap();
        assert!(ev.phase.ends_drag());
    }

    #[test]
    fn test_touch_without_points() {
        let raw = RawInput::Touch {
            kind: TouchKind::End,
            changed: SmallVec::new(),
        };
        assert!(raw.normalize().is_none());
    }

    #[test]
    fn test_mouse_and_touch_agree() {
        let mouse = RawInput::mouse(MouseKind::Move, 33.0).normalize().unwrap();
        let touch = RawInput::touch(TouchKind::Move, 33.0).normalize().unwrap();
        assert_eq!(mouse.phase, touch.phase);
        assert_eq!(mouse.x, touch.x);
    }
}
