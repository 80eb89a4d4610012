// File: crates/plot-core/tests/domain.rs
// Purpose: Validate square domain derivation from point extents.

use plot_core::Domain;

const EPS: f64 = 1e-9;

#[test]
fn padded_square_from_extents() {
    // Extents: x 0..10 (range 10), y flat (range 0) => side 10 * 1.1 = 11
    let d = Domain::from_points([(0.0, 0.0), (10.0, 0.0)].into_iter()).expect("domain");
    assert!((d.size() - 11.0).abs() < EPS);
    assert!((d.center().0 - 5.0).abs() < EPS);
    assert!(d.center().1.abs() < EPS);
    assert!((d.x.min - -0.5).abs() < EPS);
    assert!((d.x.max - 10.5).abs() < EPS);
    assert!((d.y.min - -5.5).abs() < EPS);
    assert!((d.y.max - 5.5).abs() < EPS);
}

#[test]
fn domain_is_always_square() {
    let sets: Vec<Vec<(f64, f64)>> = vec![
        vec![(0.0, 0.0), (3.0, 100.0)],
        vec![(-7.0, 2.0), (5.0, 2.5), (0.0, -1.0)],
        vec![(1e6, -1e6), (1e6 + 1.0, -1e6 + 40.0)],
    ];
    for points in sets {
        let d = Domain::from_points(points.into_iter()).expect("domain");
        assert!(
            (d.x.size() - d.y.size()).abs() < 1e-6 * d.x.size().max(1.0),
            "domain must be square, got {} x {}",
            d.x.size(),
            d.y.size()
        );
    }
}

#[test]
fn coincident_points_get_min_size() {
    let d = Domain::from_points([(3.0, 4.0), (3.0, 4.0)].into_iter()).expect("domain");
    assert!((d.size() - 1.0).abs() < EPS);
    assert!((d.center().0 - 3.0).abs() < EPS);
    assert!((d.center().1 - 4.0).abs() < EPS);
}

#[test]
fn no_points_no_domain() {
    assert!(Domain::from_points(std::iter::empty()).is_none());
}

#[test]
fn square_cover_of_rectangle() {
    // 4 x 2 rectangle => square of side 4, same center, no padding
    let d = Domain::square_cover((0.0, 0.0), (4.0, 2.0));
    assert!((d.size() - 4.0).abs() < EPS);
    assert!((d.x.min - 0.0).abs() < EPS);
    assert!((d.x.max - 4.0).abs() < EPS);
    assert!((d.y.min - -1.0).abs() < EPS);
    assert!((d.y.max - 3.0).abs() < EPS);
}

#[test]
fn square_cover_accepts_any_corner_order() {
    let a = Domain::square_cover((4.0, 2.0), (0.0, 0.0));
    let b = Domain::square_cover((0.0, 2.0), (4.0, 0.0));
    assert!((a.x.min - b.x.min).abs() < EPS);
    assert!((a.y.max - b.y.max).abs() < EPS);
}
