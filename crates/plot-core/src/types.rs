// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, interaction tunables).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Padding fraction applied around the point extents when deriving the base domain.
pub const MAP_PADDING: f64 = 0.10;
/// Fallback domain size when every point coincides (raw range zero).
pub const MIN_DOMAIN_SIZE: f64 = 1.0;

/// Brush rectangles smaller than this (either axis, in pixels) are discarded.
pub const MIN_SELECTION_PX: f32 = 10.0;
/// Pointer travel allowed before a pending point click is cancelled.
pub const CLICK_SLOP_PX: f32 = 4.0;
/// Extra pick radius around a point beyond its drawn radius.
pub const HIT_SLACK_PX: f32 = 4.0;

/// Wheel zoom factors (multiplied onto the domain span).
pub const WHEEL_ZOOM_IN: f64 = 0.9;
pub const WHEEL_ZOOM_OUT: f64 = 1.1;
/// Discrete zoom-control factors, applied around the viewport center.
pub const BUTTON_ZOOM_IN: f64 = 0.8;
pub const BUTTON_ZOOM_OUT: f64 = 1.25;

/// Point radii by emphasis (default / hovered / selected-or-new).
pub const POINT_RADIUS: f32 = 7.0;
pub const HOVER_RADIUS: f32 = 9.0;
pub const EMPHASIS_RADIUS: f32 = 10.0;
/// Resting point opacity.
pub const POINT_OPACITY: f32 = 0.9;
/// Label baseline offset below a point, in pixels.
pub const LABEL_OFFSET_PX: f32 = 18.0;

/// Animation durations in milliseconds.
pub const ENTER_EXIT_MS: f64 = 300.0;
pub const VIEW_TRANSITION_MS: f64 = 750.0;
pub const HOVER_TRANSITION_MS: f64 = 200.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60, 20, 20, 60)
    }
}
