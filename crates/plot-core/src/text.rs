// File: crates/plot-core/src/text.rs
// Summary: Text shaping for point labels, axis labels and the HUD readout via Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Shapes and draws the plot's text. Point labels and axis labels use the
/// platform sans stack; the scale readout uses a monospaced stack so the
/// digits stay put while the value changes.
pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono {
            ts.set_font_families(&["JetBrains Mono", "Menlo", "Consolas", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Inter", "Segoe UI", "Helvetica Neue", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, mono);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        // Labels are single-line; lay out wide enough to never wrap
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), mono);
        p.longest_line()
    }

    /// Draw with the anchor at the left end of the baseline.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, mono: bool) {
        let p = self.layout(text, size, color, mono);
        // Paragraph paints from its top-left; pull up by an ascent approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw with the anchor at the horizontal center of the text. Point
    /// labels and the empty-state cards hang off this.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color) {
        let w = self.measure_width(text, size, false);
        self.draw_left(canvas, text, cx - w * 0.5, y, size, color, false);
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
