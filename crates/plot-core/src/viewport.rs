// File: crates/plot-core/src/viewport.rs
// Summary: First-class viewport state machine: base/current domain and zoom transitions.

use crate::domain::Domain;

/// Mutable view state owned by one plot instance.
///
/// Two states: `Unzoomed` (`current` is `None`, the view equals `base`) and
/// `Zoomed` (`current` holds a sub-rectangle). Every transition is total and
/// synchronous; degenerate inputs are rejected by the interaction layer
/// before a transition is invoked, never here.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    base: Domain,
    current: Option<Domain>,
}

impl ViewportState {
    /// Initial state: unzoomed over the given base domain.
    pub fn new(base: Domain) -> Self {
        Self { base, current: None }
    }

    pub fn base(&self) -> Domain { self.base }

    /// The domain the transform maps from: `current` when zoomed, else `base`.
    pub fn current_domain(&self) -> Domain {
        self.current.unwrap_or(self.base)
    }

    pub fn is_zoomed(&self) -> bool {
        self.current.is_some()
    }

    /// Ratio base-domain size / current-domain size. A user-facing readout
    /// only; transform math always uses the current domain directly.
    pub fn scale_factor(&self) -> f64 {
        self.base.size() / self.current_domain().size().max(f64::EPSILON)
    }

    /// Replace the base domain after a point-set change. An unzoomed view
    /// follows the new base; a zoomed view keeps its current domain verbatim
    /// (pan/zoom survive data updates by policy).
    pub fn recenter(&mut self, new_base: Domain) {
        self.base = new_base;
    }

    /// Scale both axis intervals around a focal data point; `factor < 1`
    /// zooms in. Enters `Zoomed`.
    pub fn zoom_at(&mut self, focal: (f64, f64), factor: f64) {
        self.current = Some(self.current_domain().scaled_about(focal, factor));
    }

    /// Translate both axis intervals. Panning counts as leaving the base
    /// view, so this enters `Zoomed`; the scale factor is unchanged since the
    /// span is preserved.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.current = Some(self.current_domain().translated(dx, dy));
    }

    /// Box-select zoom: centered square cover of the data rectangle spanned
    /// by two corners, no padding. Enters `Zoomed`.
    pub fn zoom_to_rect(&mut self, corner_a: (f64, f64), corner_b: (f64, f64)) {
        self.current = Some(Domain::square_cover(corner_a, corner_b));
    }

    /// Back to `Unzoomed`: the view equals the preserved base domain and the
    /// scale factor reads 1 again.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
