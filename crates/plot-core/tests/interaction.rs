// File: crates/plot-core/tests/interaction.rs
// Purpose: Validate pointer handling end to end: wheel, pan, brush, click, hover.

use plot_core::{Domain, Modifiers, Point, PlotEvent, PointerButton, ScatterMap};

const EPS: f64 = 1e-9;

fn sample_points() -> Vec<Point> {
    vec![
        Point::with_coords("a", "Alpha", 0.0, 0.0),
        Point::with_coords("b", "Beta", 10.0, 0.0),
    ]
}

fn map_with_points() -> ScatterMap {
    let mut map = ScatterMap::new(1024.0, 640.0);
    map.set_points(sample_points(), 0.0);
    map
}

#[test]
fn wheel_zoom_fixes_the_cursor_data_position() {
    let mut map = map_with_points();
    let cursor = (300.0, 200.0);
    let before = map.transform().unwrap().screen_to_data(cursor);

    assert!(map.on_wheel(cursor.0, cursor.1, -1.0, 0.0));

    let after = map.transform().unwrap().screen_to_data(cursor);
    assert!((after.0 - before.0).abs() < 1e-6);
    assert!((after.1 - before.1).abs() < 1e-6);
    assert!((map.scale_factor() - 1.0 / 0.9).abs() < 1e-9);
    assert!(map.is_zoomed());
}

#[test]
fn wheel_without_domain_is_not_consumed() {
    let mut map = ScatterMap::new(1024.0, 640.0);
    assert!(!map.on_wheel(300.0, 200.0, -1.0, 0.0));
}

#[test]
fn wheel_out_then_in_roughly_cancels() {
    let mut map = map_with_points();
    map.on_wheel(512.0, 320.0, 1.0, 0.0);
    assert!((map.scale_factor() - 1.0 / 1.1).abs() < 1e-9);
    map.on_wheel(512.0, 320.0, -1.0, 16.0);
    assert!((map.scale_factor() - 1.0 / (1.1 * 0.9)).abs() < 1e-9);
}

#[test]
fn middle_drag_pans_anchored_to_gesture_start() {
    let mut map = map_with_points();
    let base = map.viewport().unwrap().base();
    let (dppx, _) = map.transform().unwrap().data_per_pixel();

    map.on_pointer_down(400.0, 300.0, PointerButton::Middle, Modifiers::NONE, 0.0);
    map.on_pointer_move(450.0, 300.0, 16.0);

    let d = map.viewport().unwrap().current_domain();
    assert!((d.x.min - (base.x.min - 50.0 * dppx)).abs() < EPS);
    assert!((d.y.min - base.y.min).abs() < EPS);
    assert!(map.is_zoomed());
    assert!((map.scale_factor() - 1.0).abs() < EPS);

    // Moving back to the press position undoes the pan exactly (no drift)
    map.on_pointer_move(400.0, 300.0, 32.0);
    let d = map.viewport().unwrap().current_domain();
    assert!((d.x.min - base.x.min).abs() < EPS);
    assert!((d.y.min - base.y.min).abs() < EPS);

    assert!(map.on_pointer_up(400.0, 300.0, 48.0).is_none());
}

#[test]
fn ctrl_left_drag_pans_instead_of_brushing() {
    let mut map = map_with_points();
    map.on_pointer_down(400.0, 300.0, PointerButton::Left, Modifiers::CTRL, 0.0);
    map.on_pointer_move(350.0, 280.0, 16.0);
    assert!(map.brush_rect().is_none());
    assert!(map.is_zoomed());
    assert!(map.on_pointer_up(350.0, 280.0, 32.0).is_none());
}

#[test]
fn vertical_pan_follows_the_pointer() {
    let mut map = map_with_points();
    let base = map.viewport().unwrap().base();
    let (_, dppy) = map.transform().unwrap().data_per_pixel();

    map.on_pointer_down(400.0, 300.0, PointerButton::Middle, Modifiers::NONE, 0.0);
    // Dragging downward moves the visible window up in data space
    map.on_pointer_move(400.0, 340.0, 16.0);
    let d = map.viewport().unwrap().current_domain();
    assert!((d.y.min - (base.y.min + 40.0 * dppy)).abs() < EPS);
}

#[test]
fn small_brush_is_discarded() {
    let mut map = map_with_points();
    map.on_pointer_down(400.0, 200.0, PointerButton::Left, Modifiers::NONE, 0.0);
    map.on_pointer_move(405.0, 204.0, 16.0);
    assert!(map.brush_rect().is_some());

    assert!(map.on_pointer_up(405.0, 204.0, 32.0).is_none());
    assert!(!map.is_zoomed());
    assert!(map.brush_rect().is_none());
}

#[test]
fn brush_zooms_to_square_cover_of_selection() {
    let mut map = map_with_points();
    let t = map.transform().unwrap();

    map.on_pointer_down(200.0, 150.0, PointerButton::Left, Modifiers::NONE, 0.0);
    map.on_pointer_move(400.0, 350.0, 16.0);
    assert_eq!(map.brush_rect(), Some((200.0, 150.0, 400.0, 350.0)));
    assert!(map.on_pointer_up(400.0, 350.0, 32.0).is_none());

    let expected =
        Domain::square_cover(t.screen_to_data((200.0, 350.0)), t.screen_to_data((400.0, 150.0)));
    let d = map.viewport().unwrap().current_domain();
    assert!(map.is_zoomed());
    assert!((d.x.min - expected.x.min).abs() < 1e-6);
    assert!((d.x.max - expected.x.max).abs() < 1e-6);
    assert!((d.y.min - expected.y.min).abs() < 1e-6);
    assert!((d.y.max - expected.y.max).abs() < 1e-6);
    assert!((d.x.size() - d.y.size()).abs() < 1e-6);
}

#[test]
fn click_on_point_emits_selection_event() {
    let mut map = map_with_points();
    let pos = map.transform().unwrap().data_to_screen((0.0, 0.0));

    map.on_pointer_down(pos.0, pos.1, PointerButton::Left, Modifiers::NONE, 10_000.0);
    let event = map.on_pointer_up(pos.0, pos.1, 10_000.0).expect("selection event");

    match event {
        PlotEvent::PointSelected { point, position } => {
            assert_eq!(point.id, "a");
            assert_eq!(position, pos);
        }
    }
    // A click never pans or zooms
    assert!(!map.is_zoomed());
}

#[test]
fn click_cancelled_past_the_slop() {
    let mut map = map_with_points();
    let pos = map.transform().unwrap().data_to_screen((0.0, 0.0));

    map.on_pointer_down(pos.0, pos.1, PointerButton::Left, Modifiers::NONE, 10_000.0);
    map.on_pointer_move(pos.0 + 10.0, pos.1, 10_016.0);
    assert!(map.on_pointer_up(pos.0 + 10.0, pos.1, 10_032.0).is_none());
    assert!(!map.is_zoomed());
}

#[test]
fn press_on_point_never_starts_a_brush() {
    let mut map = map_with_points();
    let pos = map.transform().unwrap().data_to_screen((0.0, 0.0));
    map.on_pointer_down(pos.0, pos.1, PointerButton::Left, Modifiers::NONE, 10_000.0);
    map.on_pointer_move(pos.0 + 50.0, pos.1 + 50.0, 10_016.0);
    assert!(map.brush_rect().is_none());
    assert!(!map.is_zoomed());
}

#[test]
fn double_click_resets_the_view() {
    let mut map = map_with_points();
    map.zoom_in(0.0);
    map.zoom_in(16.0);
    assert!(map.is_zoomed());

    map.on_double_click(32.0);
    assert!(!map.is_zoomed());
    assert!((map.scale_factor() - 1.0).abs() < EPS);
}

#[test]
fn zoom_buttons_scale_around_the_center() {
    let mut map = map_with_points();
    let center = map.transform().unwrap().plot().center();
    let before = map.transform().unwrap().screen_to_data(center);

    map.zoom_in(0.0);
    assert!((map.scale_factor() - 1.25).abs() < 1e-9);
    let after = map.transform().unwrap().screen_to_data(center);
    assert!((after.0 - before.0).abs() < 1e-6);
    assert!((after.1 - before.1).abs() < 1e-6);

    map.zoom_out(16.0);
    assert!((map.scale_factor() - 1.0).abs() < 1e-9);
}

#[test]
fn resize_preserves_the_zoomed_view() {
    let mut map = map_with_points();
    map.zoom_in(0.0);
    let before = map.viewport().unwrap().current_domain();

    map.resize(800.0, 600.0, 16.0);
    assert!(map.is_zoomed());
    assert_eq!(map.viewport().unwrap().current_domain(), before);
}

#[test]
fn hover_tracks_the_topmost_point() {
    let mut map = map_with_points();
    let pos = map.transform().unwrap().data_to_screen((0.0, 0.0));

    map.on_pointer_move(pos.0, pos.1, 10_000.0);
    assert_eq!(map.hovered_id(), Some("a"));
    assert_eq!(
        map.scene().find("a").unwrap().emphasis,
        plot_core::Emphasis::Hovered
    );

    map.on_pointer_move(pos.0 + 200.0, pos.1 + 100.0, 10_016.0);
    assert_eq!(map.hovered_id(), None);

    map.on_pointer_move(pos.0, pos.1, 10_032.0);
    map.on_pointer_leave(10_048.0);
    assert_eq!(map.hovered_id(), None);
}

#[test]
fn data_update_while_zoomed_keeps_the_view() {
    let mut map = map_with_points();
    map.zoom_in(0.0);
    let before = map.viewport().unwrap().current_domain();

    let mut extended = sample_points();
    extended.push(Point::with_coords("c", "Gamma", -20.0, 30.0));
    map.set_points(extended, 16.0);

    assert!(map.is_zoomed());
    assert_eq!(map.viewport().unwrap().current_domain(), before);
    // The base did move under the larger extents
    assert!(map.viewport().unwrap().base().size() > 11.0);
}

#[test]
fn data_update_while_unzoomed_recenters_on_new_extents() {
    let mut map = map_with_points();
    assert!(!map.is_zoomed());

    let mut extended = sample_points();
    extended.push(Point::with_coords("c", "Gamma", -20.0, 30.0));
    let expected =
        Domain::from_points(extended.iter().filter_map(|p| p.coords())).expect("domain");
    map.set_points(extended, 16.0);

    // Unzoomed view follows the recomputed base immediately
    assert!(!map.is_zoomed());
    assert_eq!(map.viewport().unwrap().current_domain(), expected);
    assert!((map.scale_factor() - 1.0).abs() < EPS);

    // Zooming and resetting afterwards lands on the new base, not the old one
    map.zoom_in(32.0);
    assert!(map.is_zoomed());
    map.reset_view(48.0);
    assert_eq!(map.viewport().unwrap().current_domain(), expected);
}

#[test]
fn clearing_points_clears_the_plot() {
    let mut map = map_with_points();
    map.set_points(Vec::new(), 16.0);
    assert!(!map.has_domain());
    assert!(map.scene().is_empty());
    assert!((map.scale_factor() - 1.0).abs() < EPS);
}

#[test]
fn selection_highlight_is_exclusive_by_input() {
    let mut map = map_with_points();
    map.set_selected(Some("a"), 0.0);
    map.set_newly_added(Some("b"), 0.0);
    assert_eq!(map.scene().find("a").unwrap().emphasis, plot_core::Emphasis::Selected);
    assert_eq!(map.scene().find("b").unwrap().emphasis, plot_core::Emphasis::NewlyAdded);

    map.set_selected(None, 16.0);
    assert_eq!(map.scene().find("a").unwrap().emphasis, plot_core::Emphasis::Normal);
}

#[test]
fn tick_reports_animation_in_flight() {
    let mut map = map_with_points();
    // Enter animations start at t=0 and settle at t=300
    assert!(map.tick(100.0));
    assert!(!map.tick(1_000.0));
}
