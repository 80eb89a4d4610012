// File: crates/plot-core/src/domain.rs
// Summary: Square data-space domain math: spans, padded extents, squared rectangle cover.

use crate::types::{MAP_PADDING, MIN_DOMAIN_SIZE};

/// Closed interval in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    /// Create a span, swapping bounds if given in reverse.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    pub fn size(&self) -> f64 { self.max - self.min }

    pub fn center(&self) -> f64 { (self.min + self.max) * 0.5 }

    /// Span of `size` centered on `center`.
    pub fn centered(center: f64, size: f64) -> Self {
        Self { min: center - size * 0.5, max: center + size * 0.5 }
    }

    pub fn translated(&self, delta: f64) -> Self {
        Self { min: self.min + delta, max: self.max + delta }
    }

    /// Scale the span about a focal value; `factor < 1` shrinks (zooms in).
    pub fn scaled_about(&self, focal: f64, factor: f64) -> Self {
        Self {
            min: focal + (self.min - focal) * factor,
            max: focal + (self.max - focal) * factor,
        }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Axis-aligned square rectangle in data space: the visible extent.
/// Invariant: `x.size() == y.size()` (within floating tolerance) for every
/// constructor in this module.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub x: Span,
    pub y: Span,
}

impl Domain {
    /// Square domain of `size` centered on (`cx`, `cy`).
    pub fn centered_square(cx: f64, cy: f64, size: f64) -> Self {
        Self { x: Span::centered(cx, size), y: Span::centered(cy, size) }
    }

    /// Derive the padded base domain from coordinate-complete points.
    /// Returns `None` for an empty iterator: with no placeable point there is
    /// no domain and no plot is drawn.
    pub fn from_points(points: impl Iterator<Item = (f64, f64)>) -> Option<Self> {
        Self::from_points_padded(points, MAP_PADDING)
    }

    /// As [`from_points`](Self::from_points) with an explicit padding fraction.
    pub fn from_points_padded(
        points: impl Iterator<Item = (f64, f64)>,
        padding_fraction: f64,
    ) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut any = false;
        for (x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
            any = true;
        }
        if !any {
            return None;
        }
        // Larger of the two raw extents keeps the 1:1 aspect ratio.
        let raw_range = (x_max - x_min).max(y_max - y_min);
        let size = if raw_range > 0.0 {
            raw_range + raw_range * padding_fraction
        } else {
            // All points coincide; substitute a non-degenerate size so the
            // inverse transform stays finite.
            MIN_DOMAIN_SIZE
        };
        Some(Self::centered_square(
            (x_min + x_max) * 0.5,
            (y_min + y_max) * 0.5,
            size,
        ))
    }

    /// Smallest centered square covering the rectangle spanned by two data
    /// corners (any corner order). No padding; used by box-select zoom.
    pub fn square_cover(a: (f64, f64), b: (f64, f64)) -> Self {
        let x = Span::new(a.0, b.0);
        let y = Span::new(a.1, b.1);
        let size = x.size().max(y.size());
        Self::centered_square(x.center(), y.center(), size)
    }

    /// Side length of the square domain.
    pub fn size(&self) -> f64 { self.x.size() }

    pub fn center(&self) -> (f64, f64) { (self.x.center(), self.y.center()) }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self { x: self.x.translated(dx), y: self.y.translated(dy) }
    }

    /// Scale both axes about a focal data point; `factor < 1` zooms in.
    pub fn scaled_about(&self, focal: (f64, f64), factor: f64) -> Self {
        Self {
            x: self.x.scaled_about(focal.0, factor),
            y: self.y.scaled_about(focal.1, factor),
        }
    }

    pub fn contains(&self, p: (f64, f64)) -> bool {
        self.x.contains(p.0) && self.y.contains(p.1)
    }
}
