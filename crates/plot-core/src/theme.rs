// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for plot rendering colors.

use skia_safe as skia;

use crate::scene::Emphasis;

/// Radial two-stop fill plus stroke for one point emphasis state.
#[derive(Clone, Copy, Debug)]
pub struct PointStyle {
    pub inner: skia::Color,
    pub outer: skia::Color,
    pub stroke: skia::Color,
    pub stroke_width: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub point_label: skia::Color,
    pub point_label_selected: skia::Color,
    pub normal: PointStyle,
    pub selected: PointStyle,
    pub newly_added: PointStyle,
    pub hovered: PointStyle,
    pub brush_fill: skia::Color,
    pub brush_stroke: skia::Color,
    pub hud_text: skia::Color,
    pub status_text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(24, 99, 102, 241),
            axis_label: skia::Color::from_argb(255, 160, 160, 170),
            point_label: skia::Color::from_argb(242, 156, 163, 175),
            point_label_selected: skia::Color::from_argb(255, 196, 181, 253),
            normal: PointStyle {
                inner: skia::Color::from_argb(230, 0x4F, 0x46, 0xE5),
                outer: skia::Color::from_argb(178, 0xA8, 0x55, 0xF7),
                stroke: skia::Color::from_argb(153, 255, 255, 255),
                stroke_width: 1.5,
            },
            selected: PointStyle {
                inner: skia::Color::from_argb(255, 0xF5, 0x9E, 0x0B),
                outer: skia::Color::from_argb(204, 0xDC, 0x26, 0x26),
                stroke: skia::Color::from_argb(230, 255, 255, 255),
                stroke_width: 2.5,
            },
            newly_added: PointStyle {
                inner: skia::Color::from_argb(255, 0x10, 0xB9, 0x81),
                outer: skia::Color::from_argb(204, 0x04, 0x78, 0x57),
                stroke: skia::Color::from_argb(230, 255, 255, 255),
                stroke_width: 2.5,
            },
            hovered: PointStyle {
                inner: skia::Color::from_argb(255, 0x06, 0xB6, 0xD4),
                outer: skia::Color::from_argb(204, 0x0E, 0x74, 0x90),
                stroke: skia::Color::from_argb(153, 255, 255, 255),
                stroke_width: 1.5,
            },
            brush_fill: skia::Color::from_argb(26, 59, 130, 246),
            brush_stroke: skia::Color::from_argb(204, 59, 130, 246),
            hud_text: skia::Color::from_argb(255, 220, 220, 230),
            status_text: skia::Color::from_argb(255, 150, 150, 160),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(20, 99, 102, 241),
            axis_label: skia::Color::from_argb(255, 102, 102, 102),
            point_label: skia::Color::from_argb(242, 0x6B, 0x72, 0x80),
            point_label_selected: skia::Color::from_argb(255, 0x4C, 0x1D, 0x95),
            normal: PointStyle {
                inner: skia::Color::from_argb(230, 0x4F, 0x46, 0xE5),
                outer: skia::Color::from_argb(178, 0xA8, 0x55, 0xF7),
                stroke: skia::Color::from_argb(153, 255, 255, 255),
                stroke_width: 1.5,
            },
            selected: PointStyle {
                inner: skia::Color::from_argb(255, 0xF5, 0x9E, 0x0B),
                outer: skia::Color::from_argb(204, 0xDC, 0x26, 0x26),
                stroke: skia::Color::from_argb(230, 255, 255, 255),
                stroke_width: 2.5,
            },
            newly_added: PointStyle {
                inner: skia::Color::from_argb(255, 0x10, 0xB9, 0x81),
                outer: skia::Color::from_argb(204, 0x04, 0x78, 0x57),
                stroke: skia::Color::from_argb(230, 255, 255, 255),
                stroke_width: 2.5,
            },
            hovered: PointStyle {
                inner: skia::Color::from_argb(255, 0x06, 0xB6, 0xD4),
                outer: skia::Color::from_argb(204, 0x0E, 0x74, 0x90),
                stroke: skia::Color::from_argb(153, 255, 255, 255),
                stroke_width: 1.5,
            },
            brush_fill: skia::Color::from_argb(26, 59, 130, 246),
            brush_stroke: skia::Color::from_argb(204, 59, 130, 246),
            hud_text: skia::Color::from_argb(255, 40, 40, 50),
            status_text: skia::Color::from_argb(255, 120, 120, 130),
        }
    }

    /// Style for a node's emphasis state.
    pub fn point_style(&self, emphasis: Emphasis) -> PointStyle {
        match emphasis {
            Emphasis::Selected => self.selected,
            Emphasis::NewlyAdded => self.newly_added,
            Emphasis::Hovered => self.hovered,
            Emphasis::Normal => self.normal,
        }
    }
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
