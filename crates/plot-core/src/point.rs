// File: crates/plot-core/src/point.rs
// Summary: Point model (stable id, display label, optional coordinates) and axis labels.

/// A plotted item. Identity (`id`) — not list position — is the join key
/// across re-renders; a point missing either coordinate is excluded from
/// rendering and from domain computation.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub id: String,
    pub label: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Point {
    /// A point without coordinates yet (coordinates arrive computed elsewhere).
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), x: None, y: None }
    }

    pub fn with_coords(id: impl Into<String>, label: impl Into<String>, x: f64, y: f64) -> Self {
        Self { id: id.into(), label: label.into(), x: Some(x), y: Some(y) }
    }

    /// Both coordinates, if the point is coordinate-complete.
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}

/// Free-text descriptions of what the two coordinates mean. Presentational only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisLabels {
    pub x_axis: String,
    pub y_axis: String,
}

impl AxisLabels {
    pub fn new(x_axis: impl Into<String>, y_axis: impl Into<String>) -> Self {
        Self { x_axis: x_axis.into(), y_axis: y_axis.into() }
    }
}
