// File: crates/plot-core/src/gesture.rs
// Summary: Pointer-event model and the gesture-disambiguation state machine.

use crate::domain::Domain;

/// Pointer buttons the plot reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Modifier keys held during a pointer press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { ctrl: false, shift: false };
    pub const CTRL: Self = Self { ctrl: true, shift: false };
}

/// Arbitration over the single pointer stream. Precedence on press:
/// click on a point > brush on the background > pan (middle button or
/// ctrl+left). A pending click that travels past the slop is cancelled
/// rather than re-interpreted.
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
    Idle,
    /// Left press landed on a point; becomes a selection if released in place.
    PendingClick { id: String, start: (f32, f32) },
    /// Middle or ctrl+left drag. The domain and pixel scale are frozen at
    /// gesture start so per-move conversion does not feed back into itself.
    Panning {
        start: (f32, f32),
        data_per_pixel: (f64, f64),
        start_domain: Domain,
    },
    /// Plain left drag on the background drawing a selection rectangle.
    Brushing { start: (f32, f32), current: (f32, f32) },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Normalized (left, top, right, bottom) of the in-progress brush
    /// rectangle, if one is being drawn.
    pub fn brush_rect(&self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Self::Brushing { start, current } => Some(normalize_rect(*start, *current)),
            _ => None,
        }
    }
}

/// Order two corners into (left, top, right, bottom).
pub fn normalize_rect(a: (f32, f32), b: (f32, f32)) -> (f32, f32, f32, f32) {
    (a.0.min(b.0), a.1.min(b.1), a.0.max(b.0), a.1.max(b.1))
}
