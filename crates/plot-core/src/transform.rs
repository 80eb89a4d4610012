// File: crates/plot-core/src/transform.rs
// Summary: Linear data<->screen transform pair derived from domain + surface size + insets.

use crate::domain::Domain;
use crate::types::Insets;

/// Plot drawing rectangle in surface pixels (insets applied).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Pure mapping between data space and screen space, valid for one
/// (domain, surface size) pair. Re-derived whenever either changes; holds no
/// state of its own. Screen y grows downward, so the y map is inverted:
/// `domain.y.min` lands on the plot bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    domain: Domain,
    plot: PlotRect,
}

impl Transform {
    pub fn new(domain: Domain, width: f32, height: f32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width - insets.right as f32).max(left + 1.0);
        let bottom = (height - insets.bottom as f32).max(top + 1.0);
        Self { domain, plot: PlotRect { left, top, right, bottom } }
    }

    pub fn domain(&self) -> Domain { self.domain }

    pub fn plot(&self) -> PlotRect { self.plot }

    #[inline]
    pub fn x_to_screen(&self, x: f64) -> f32 {
        let span = self.domain.x.size().max(1e-12);
        self.plot.left + (((x - self.domain.x.min) / span) as f32) * self.plot.width()
    }

    #[inline]
    pub fn y_to_screen(&self, y: f64) -> f32 {
        let span = self.domain.y.size().max(1e-12);
        self.plot.bottom - (((y - self.domain.y.min) / span) as f32) * self.plot.height()
    }

    #[inline]
    pub fn x_from_screen(&self, px: f32) -> f64 {
        let span = self.domain.x.size().max(1e-12);
        self.domain.x.min + ((px - self.plot.left) / self.plot.width().max(1.0)) as f64 * span
    }

    #[inline]
    pub fn y_from_screen(&self, py: f32) -> f64 {
        let span = self.domain.y.size().max(1e-12);
        self.domain.y.min + ((self.plot.bottom - py) / self.plot.height().max(1.0)) as f64 * span
    }

    pub fn data_to_screen(&self, p: (f64, f64)) -> (f32, f32) {
        (self.x_to_screen(p.0), self.y_to_screen(p.1))
    }

    pub fn screen_to_data(&self, p: (f32, f32)) -> (f64, f64) {
        (self.x_from_screen(p.0), self.y_from_screen(p.1))
    }

    /// Data units per pixel, captured by the pan handler at gesture start so
    /// later moves don't drift with the moving domain.
    pub fn data_per_pixel(&self) -> (f64, f64) {
        (
            self.domain.x.size() / self.plot.width().max(1.0) as f64,
            self.domain.y.size() / self.plot.height().max(1.0) as f64,
        )
    }
}
