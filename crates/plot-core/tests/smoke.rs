// File: crates/plot-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use plot_core::{AxisLabels, Point, RenderOptions, ScatterMap};

#[test]
fn render_smoke_png() {
    let mut map = ScatterMap::new(640.0, 480.0);
    map.set_axis_labels(AxisLabels::new("Sweetness", "Crunchiness"));
    map.set_points(
        vec![
            Point::with_coords("apple", "Apple", 6.0, 7.0),
            Point::with_coords("banana", "Banana", 8.5, 2.0),
            Point::with_coords("carrot", "Carrot", 3.0, 9.0),
            Point::with_coords("date", "Date", 9.5, 1.0),
        ],
        0.0,
    );
    map.set_selected(Some("banana"), 0.0);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/scatter_smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    map.render_to_png(&opts, 10_000.0, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = map.render_to_png_bytes(&opts, 10_000.0).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
