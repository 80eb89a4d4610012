// File: crates/plot-core/tests/transform.rs
// Purpose: Validate the data<->screen mapping, including the y inversion.

use plot_core::{Domain, Insets, Transform};

fn transform() -> Transform {
    // Default insets: left 60, right 20, top 20, bottom 60 on 1024x640
    Transform::new(Domain::centered_square(0.0, 0.0, 10.0), 1024.0, 640.0, &Insets::default())
}

#[test]
fn domain_corners_land_on_plot_edges() {
    let t = transform();
    let plot = t.plot();
    assert_eq!(plot.left, 60.0);
    assert_eq!(plot.top, 20.0);
    assert_eq!(plot.right, 1004.0);
    assert_eq!(plot.bottom, 580.0);

    assert!((t.x_to_screen(-5.0) - plot.left).abs() < 1e-3);
    assert!((t.x_to_screen(5.0) - plot.right).abs() < 1e-3);
    // Screen y grows downward: domain minimum maps to the plot bottom
    assert!((t.y_to_screen(-5.0) - plot.bottom).abs() < 1e-3);
    assert!((t.y_to_screen(5.0) - plot.top).abs() < 1e-3);
}

#[test]
fn roundtrip_data_screen_data() {
    let t = transform();
    for &p in &[(0.0, 0.0), (-5.0, 5.0), (3.25, -1.75), (4.999, 4.999)] {
        let s = t.data_to_screen(p);
        let back = t.screen_to_data(s);
        assert!((back.0 - p.0).abs() < 1e-4, "x roundtrip for {p:?}");
        assert!((back.1 - p.1).abs() < 1e-4, "y roundtrip for {p:?}");
    }
}

#[test]
fn data_per_pixel_matches_plot_dimensions() {
    let t = transform();
    let (dx, dy) = t.data_per_pixel();
    assert!((dx - 10.0 / 944.0).abs() < 1e-9);
    assert!((dy - 10.0 / 560.0).abs() < 1e-9);
}

#[test]
fn degenerate_surface_does_not_divide_by_zero() {
    let t = Transform::new(Domain::centered_square(0.0, 0.0, 10.0), 10.0, 10.0, &Insets::default());
    let s = t.data_to_screen((0.0, 0.0));
    assert!(s.0.is_finite() && s.1.is_finite());
    let d = t.screen_to_data(s);
    assert!(d.0.is_finite() && d.1.is_finite());
}
