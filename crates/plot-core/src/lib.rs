// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the public API for the interactive scatter map.

pub mod animate;
pub mod domain;
pub mod gesture;
pub mod plot;
pub mod point;
pub mod render;
pub mod scene;
pub mod text;
pub mod theme;
pub mod transform;
pub mod types;
pub mod viewport;

pub use domain::{Domain, Span};
pub use gesture::{Gesture, Modifiers, PointerButton};
pub use plot::{PlotEvent, ScatterMap};
pub use point::{AxisLabels, Point};
pub use render::{RenderError, RenderOptions};
pub use scene::{Emphasis, PointNode, Scene};
pub use text::TextShaper;
pub use theme::Theme;
pub use transform::{PlotRect, Transform};
pub use types::Insets;
pub use viewport::ViewportState;
