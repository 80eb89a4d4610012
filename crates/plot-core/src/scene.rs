// File: crates/plot-core/src/scene.rs
// Summary: Keyed scene diff: points matched to rendered nodes by id, with enter/exit/update animation.

use crate::animate::Animated;
use crate::point::Point;
use crate::transform::Transform;
use crate::types::{
    EMPHASIS_RADIUS, ENTER_EXIT_MS, HIT_SLACK_PX, HOVER_RADIUS, HOVER_TRANSITION_MS, POINT_OPACITY,
    POINT_RADIUS,
};

/// Visual emphasis, evaluated in priority order: selected wins over
/// newly-added, which wins over hovered, which wins over default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Selected,
    NewlyAdded,
    Hovered,
    Normal,
}

impl Emphasis {
    fn of(
        id: &str,
        selected: Option<&str>,
        newly_added: Option<&str>,
        hovered: Option<&str>,
    ) -> Self {
        if selected == Some(id) {
            Self::Selected
        } else if newly_added == Some(id) {
            Self::NewlyAdded
        } else if hovered == Some(id) {
            Self::Hovered
        } else {
            Self::Normal
        }
    }

    /// Resting radius for this emphasis, in pixels.
    pub fn radius(self) -> f32 {
        match self {
            Self::Selected | Self::NewlyAdded => EMPHASIS_RADIUS,
            Self::Hovered => HOVER_RADIUS,
            Self::Normal => POINT_RADIUS,
        }
    }
}

/// One rendered point: screen position and styling as animated properties.
#[derive(Clone, Debug)]
pub struct PointNode {
    pub id: String,
    pub label: String,
    /// Data coordinates backing the node; positions re-derive from these on
    /// every viewport or resize change.
    pub data: (f64, f64),
    pub x: Animated,
    pub y: Animated,
    pub radius: Animated,
    pub opacity: Animated,
    pub emphasis: Emphasis,
    /// Exiting nodes shrink/fade out and are pruned once settled.
    pub exiting: bool,
}

/// Rendered nodes keyed by point id. The diff against an incoming point list
/// replaces a retained scene graph: entering points grow in, absent points
/// animate out, survivors retarget in place.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<PointNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn nodes(&self) -> &[PointNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Diff the scene against the incoming point list (coordinate-incomplete
    /// points are skipped) and the current emphasis ids. Nodes are matched by
    /// id, never by list position, so external add/remove/reselect cycles
    /// preserve node identity.
    pub fn sync(
        &mut self,
        points: &[Point],
        transform: &Transform,
        selected: Option<&str>,
        newly_added: Option<&str>,
        hovered: Option<&str>,
        now_ms: f64,
    ) {
        let mut old: Vec<Option<PointNode>> = std::mem::take(&mut self.nodes)
            .into_iter()
            .map(Some)
            .collect();
        let mut next: Vec<PointNode> = Vec::with_capacity(points.len());

        for point in points {
            let Some(coords) = point.coords() else { continue };
            let (sx, sy) = transform.data_to_screen(coords);
            let emphasis = Emphasis::of(&point.id, selected, newly_added, hovered);

            let existing = old
                .iter()
                .position(|slot| slot.as_ref().is_some_and(|n| n.id == point.id))
                .and_then(|i| old[i].take());

            match existing {
                Some(mut node) => {
                    node.label = point.label.clone();
                    node.data = coords;
                    node.x.retarget(sx, now_ms, ENTER_EXIT_MS);
                    node.y.retarget(sy, now_ms, ENTER_EXIT_MS);
                    // Hover flips are snappier than structural changes.
                    let style_ms = if emphasis == Emphasis::Hovered || node.emphasis == Emphasis::Hovered {
                        HOVER_TRANSITION_MS
                    } else {
                        ENTER_EXIT_MS
                    };
                    if node.exiting {
                        // Re-added before the exit finished: grow back in.
                        node.exiting = false;
                        node.radius.retarget(emphasis.radius(), now_ms, ENTER_EXIT_MS);
                        node.opacity.retarget(POINT_OPACITY, now_ms, ENTER_EXIT_MS);
                    } else {
                        node.radius.retarget(emphasis.radius(), now_ms, style_ms);
                        node.opacity.retarget(POINT_OPACITY, now_ms, style_ms);
                    }
                    node.emphasis = emphasis;
                    next.push(node);
                }
                None => {
                    // Enter: grow from zero size, fade in, already in place.
                    next.push(PointNode {
                        id: point.id.clone(),
                        label: point.label.clone(),
                        data: coords,
                        x: Animated::fixed(sx),
                        y: Animated::fixed(sy),
                        radius: Animated::starting_at(0.0, emphasis.radius(), now_ms, ENTER_EXIT_MS),
                        opacity: Animated::starting_at(0.0, POINT_OPACITY, now_ms, ENTER_EXIT_MS),
                        emphasis,
                        exiting: false,
                    });
                }
            }
        }

        // Whatever was not re-matched animates out in place.
        for slot in old {
            let Some(mut node) = slot else { continue };
            if !node.exiting {
                node.exiting = true;
                node.radius.retarget(0.0, now_ms, ENTER_EXIT_MS);
                node.opacity.retarget(0.0, now_ms, ENTER_EXIT_MS);
            }
            next.push(node);
        }

        self.nodes = next;
    }

    /// Re-derive every node's screen position from its data coordinates.
    /// `duration_ms == 0` snaps (resize); a positive duration animates the
    /// viewport transition, retargeting any interpolation in flight.
    pub fn retarget_positions(&mut self, transform: &Transform, now_ms: f64, duration_ms: f64) {
        for node in &mut self.nodes {
            let (sx, sy) = transform.data_to_screen(node.data);
            if duration_ms <= 0.0 {
                node.x.snap(sx);
                node.y.snap(sy);
            } else {
                node.x.retarget(sx, now_ms, duration_ms);
                node.y.retarget(sy, now_ms, duration_ms);
            }
        }
    }

    /// Prune exit animations that have finished.
    pub fn tick(&mut self, now_ms: f64) {
        self.nodes
            .retain(|n| !(n.exiting && n.opacity.is_settled(now_ms) && n.radius.is_settled(now_ms)));
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.nodes.iter().any(|n| {
            !n.x.is_settled(now_ms)
                || !n.y.is_settled(now_ms)
                || !n.radius.is_settled(now_ms)
                || !n.opacity.is_settled(now_ms)
        })
    }

    /// Topmost (last-drawn) live node under the pointer, if any.
    pub fn hit_test(&self, sx: f32, sy: f32, now_ms: f64) -> Option<&PointNode> {
        self.nodes.iter().rev().filter(|n| !n.exiting).find(|n| {
            let dx = n.x.value_at(now_ms) - sx;
            let dy = n.y.value_at(now_ms) - sy;
            let reach = n.radius.value_at(now_ms).max(POINT_RADIUS) + HIT_SLACK_PX;
            dx * dx + dy * dy <= reach * reach
        })
    }

    pub fn find(&self, id: &str) -> Option<&PointNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
