// File: crates/plot-core/src/plot.rs
// Summary: ScatterMap component: inputs, viewport ownership, interaction handlers, selection events.

use crate::domain::Domain;
use crate::gesture::{Gesture, Modifiers, PointerButton};
use crate::point::{AxisLabels, Point};
use crate::scene::Scene;
use crate::transform::Transform;
use crate::types::{
    BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT, CLICK_SLOP_PX, HEIGHT, Insets, MIN_SELECTION_PX,
    VIEW_TRANSITION_MS, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT, WIDTH,
};
use crate::viewport::ViewportState;

/// Event emitted upward to the external selection-state owner. Pan, zoom and
/// reset stay internal and are never reported.
#[derive(Clone, Debug, PartialEq)]
pub enum PlotEvent {
    /// A rendered point was clicked (press and release within the slop).
    /// `position` is relative to the drawing surface's top-left corner.
    PointSelected { point: Point, position: (f32, f32) },
}

/// One interactive scatter-plot instance. Owns exactly one mutable viewport
/// state; all handlers run synchronously on the caller's thread. Time is
/// passed in as milliseconds so animation stays schedulable and testable.
pub struct ScatterMap {
    pub(crate) points: Vec<Point>,
    pub(crate) axis_labels: AxisLabels,
    pub(crate) selected_id: Option<String>,
    pub(crate) newly_added_id: Option<String>,
    pub(crate) hovered_id: Option<String>,
    pub(crate) loading: bool,
    pub(crate) viewport: Option<ViewportState>,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) insets: Insets,
    pub(crate) scene: Scene,
    pub(crate) gesture: Gesture,
}

impl ScatterMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            points: Vec::new(),
            axis_labels: AxisLabels::default(),
            selected_id: None,
            newly_added_id: None,
            hovered_id: None,
            loading: false,
            viewport: None,
            width: width.max(1.0),
            height: height.max(1.0),
            insets: Insets::default(),
            scene: Scene::new(),
            gesture: Gesture::Idle,
        }
    }

    // ---- inputs ---------------------------------------------------------

    /// Replace the point list. The base domain is recomputed from the
    /// coordinate-complete points; an unzoomed view recenters on it while a
    /// zoomed view keeps its current domain (pan/zoom survive data updates).
    pub fn set_points(&mut self, points: Vec<Point>, now_ms: f64) {
        self.points = points;
        let domain = Domain::from_points(self.points.iter().filter_map(Point::coords));
        match (domain, self.viewport.as_mut()) {
            (Some(base), Some(view)) => view.recenter(base),
            (Some(base), None) => self.viewport = Some(ViewportState::new(base)),
            (None, _) => {
                // Fewer than one placeable point: no domain, no plot.
                self.viewport = None;
                self.scene.clear();
                self.hovered_id = None;
                self.gesture = Gesture::Idle;
            }
        }
        self.sync_scene(now_ms);
    }

    pub fn set_axis_labels(&mut self, labels: AxisLabels) {
        self.axis_labels = labels;
    }

    pub fn axis_labels(&self) -> &AxisLabels {
        &self.axis_labels
    }

    /// Externally owned exclusive selection (at most one id).
    pub fn set_selected(&mut self, id: Option<&str>, now_ms: f64) {
        self.selected_id = id.map(str::to_owned);
        self.sync_scene(now_ms);
    }

    /// Externally owned, externally timed-out "newly added" highlight.
    pub fn set_newly_added(&mut self, id: Option<&str>, now_ms: f64) {
        self.newly_added_id = id.map(str::to_owned);
        self.sync_scene(now_ms);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Observe a surface resize: re-derive the transform from the existing
    /// viewport state (never resets zoom) and snap node positions.
    pub fn resize(&mut self, width: f32, height: f32, now_ms: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        if let Some(t) = self.transform() {
            self.scene.retarget_positions(&t, now_ms, 0.0);
        }
    }

    // ---- readouts -------------------------------------------------------

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn has_domain(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn is_zoomed(&self) -> bool {
        self.viewport.as_ref().is_some_and(ViewportState::is_zoomed)
    }

    /// User-facing zoom readout; 1.0 when unzoomed or before any domain exists.
    pub fn scale_factor(&self) -> f64 {
        self.viewport.as_ref().map_or(1.0, ViewportState::scale_factor)
    }

    pub fn viewport(&self) -> Option<&ViewportState> {
        self.viewport.as_ref()
    }

    /// The transform valid for the current domain and surface size.
    pub fn transform(&self) -> Option<Transform> {
        self.viewport
            .as_ref()
            .map(|v| Transform::new(v.current_domain(), self.width, self.height, &self.insets))
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered_id.as_deref()
    }

    /// In-progress brush rectangle, for the render overlay.
    pub fn brush_rect(&self) -> Option<(f32, f32, f32, f32)> {
        self.gesture.brush_rect()
    }

    // ---- interaction handlers -------------------------------------------

    /// Wheel zoom around the cursor's data position. Returns true when the
    /// event was consumed (the embedder should suppress native scrolling).
    pub fn on_wheel(&mut self, sx: f32, sy: f32, delta_y: f32, now_ms: f64) -> bool {
        let Some(t) = self.transform() else { return false };
        if delta_y == 0.0 {
            return false;
        }
        let factor = if delta_y < 0.0 { WHEEL_ZOOM_IN } else { WHEEL_ZOOM_OUT };
        let focal = t.screen_to_data((sx, sy));
        if let Some(view) = self.viewport.as_mut() {
            view.zoom_at(focal, factor);
        }
        self.view_changed(now_ms);
        true
    }

    /// Pointer press: arbitrate click vs pan vs brush. Points win over the
    /// background, so a press on a point never starts a drag gesture.
    pub fn on_pointer_down(
        &mut self,
        sx: f32,
        sy: f32,
        button: PointerButton,
        modifiers: Modifiers,
        now_ms: f64,
    ) {
        let Some(t) = self.transform() else { return };
        let pan_trigger = button == PointerButton::Middle
            || (button == PointerButton::Left && modifiers.ctrl);
        if pan_trigger {
            self.gesture = Gesture::Panning {
                start: (sx, sy),
                data_per_pixel: t.data_per_pixel(),
                start_domain: t.domain(),
            };
            return;
        }
        if button != PointerButton::Left {
            return;
        }
        if let Some(node) = self.scene.hit_test(sx, sy, now_ms) {
            self.gesture = Gesture::PendingClick { id: node.id.clone(), start: (sx, sy) };
        } else if t.plot().contains(sx, sy) {
            self.gesture = Gesture::Brushing { start: (sx, sy), current: (sx, sy) };
        }
    }

    /// Pointer move: advance the active gesture and track hover emphasis.
    pub fn on_pointer_move(&mut self, sx: f32, sy: f32, now_ms: f64) {
        match self.gesture.clone() {
            Gesture::Idle => self.update_hover(sx, sy, now_ms),
            Gesture::PendingClick { start, .. } => {
                if dist_exceeds(start, (sx, sy), CLICK_SLOP_PX) {
                    // Too much travel for a click; not reinterpreted as a drag.
                    self.gesture = Gesture::Idle;
                }
            }
            Gesture::Panning { start, data_per_pixel, start_domain } => {
                // Anchor to the gesture-start domain so repeated conversion
                // through a moving transform cannot drift.
                let dx = ((sx - start.0) as f64) * data_per_pixel.0;
                let dy = ((sy - start.1) as f64) * data_per_pixel.1;
                let target = start_domain.translated(-dx, dy);
                if let Some(view) = self.viewport.as_mut() {
                    let current = view.current_domain();
                    view.pan_by(target.x.min - current.x.min, target.y.min - current.y.min);
                }
                self.view_changed(now_ms);
            }
            Gesture::Brushing { start, .. } => {
                self.gesture = Gesture::Brushing { start, current: (sx, sy) };
            }
        }
    }

    /// Pointer release: commit or discard the active gesture. A committed
    /// click returns the selection event for the external owner.
    pub fn on_pointer_up(&mut self, sx: f32, sy: f32, now_ms: f64) -> Option<PlotEvent> {
        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);
        match gesture {
            Gesture::PendingClick { id, start } => {
                if dist_exceeds(start, (sx, sy), CLICK_SLOP_PX) {
                    return None;
                }
                let point = self.points.iter().find(|p| p.id == id)?.clone();
                Some(PlotEvent::PointSelected { point, position: (sx, sy) })
            }
            Gesture::Brushing { start, current: _ } => {
                let (l, t, r, b) = crate::gesture::normalize_rect(start, (sx, sy));
                if r - l < MIN_SELECTION_PX || b - t < MIN_SELECTION_PX {
                    // Degenerate rectangle: treat as a non-select click, the
                    // rectangle simply disappears with no state change.
                    return None;
                }
                let transform = self.transform()?;
                // Invert both corners; square_cover normalizes the y flip.
                let a = transform.screen_to_data((l, b));
                let bb = transform.screen_to_data((r, t));
                if let Some(view) = self.viewport.as_mut() {
                    view.zoom_to_rect(a, bb);
                }
                self.view_changed(now_ms);
                None
            }
            Gesture::Panning { .. } | Gesture::Idle => None,
        }
    }

    /// The pointer left the surface: end any drag, drop hover emphasis.
    pub fn on_pointer_leave(&mut self, now_ms: f64) {
        self.gesture = Gesture::Idle;
        if self.hovered_id.take().is_some() {
            self.sync_scene(now_ms);
        }
    }

    /// Double-click resets to the base view.
    pub fn on_double_click(&mut self, now_ms: f64) {
        self.reset_view(now_ms);
    }

    /// Dedicated reset control: back to the unzoomed base domain.
    pub fn reset_view(&mut self, now_ms: f64) {
        if let Some(view) = self.viewport.as_mut() {
            view.reset();
            self.view_changed(now_ms);
        }
    }

    /// Discrete zoom-in control, centered on the viewport's visual center.
    pub fn zoom_in(&mut self, now_ms: f64) {
        self.zoom_centered(BUTTON_ZOOM_IN, now_ms);
    }

    /// Discrete zoom-out control, centered on the viewport's visual center.
    pub fn zoom_out(&mut self, now_ms: f64) {
        self.zoom_centered(BUTTON_ZOOM_OUT, now_ms);
    }

    /// Advance animations; returns true while anything is still in flight so
    /// the embedder can keep scheduling redraws.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.scene.tick(now_ms);
        self.scene.is_animating(now_ms)
    }

    // ---- internals ------------------------------------------------------

    fn zoom_centered(&mut self, factor: f64, now_ms: f64) {
        let Some(t) = self.transform() else { return };
        let center = t.plot().center();
        let focal = t.screen_to_data(center);
        if let Some(view) = self.viewport.as_mut() {
            view.zoom_at(focal, factor);
        }
        self.view_changed(now_ms);
    }

    fn update_hover(&mut self, sx: f32, sy: f32, now_ms: f64) {
        let hit = self.scene.hit_test(sx, sy, now_ms).map(|n| n.id.clone());
        if hit != self.hovered_id {
            self.hovered_id = hit;
            self.sync_scene(now_ms);
        }
    }

    /// Viewport transition: node positions glide to the new transform.
    fn view_changed(&mut self, now_ms: f64) {
        if let Some(t) = self.transform() {
            self.scene.retarget_positions(&t, now_ms, VIEW_TRANSITION_MS);
        }
    }

    fn sync_scene(&mut self, now_ms: f64) {
        let Some(t) = self.transform() else {
            self.scene.clear();
            return;
        };
        self.scene.sync(
            &self.points,
            &t,
            self.selected_id.as_deref(),
            self.newly_added_id.as_deref(),
            self.hovered_id.as_deref(),
            now_ms,
        );
    }
}

impl Default for ScatterMap {
    fn default() -> Self {
        Self::new(WIDTH as f32, HEIGHT as f32)
    }
}

fn dist_exceeds(a: (f32, f32), b: (f32, f32), slop: f32) -> bool {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    dx * dx + dy * dy > slop * slop
}
