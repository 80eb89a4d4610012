// File: crates/window-demo/src/main.rs
// Summary: Minimal windowed demo driving the interactive scatter map via RGBA blit (CPU) using winit + softbuffer.

use plot_core::{
    AxisLabels, Modifiers, PlotEvent, Point, PointerButton, RenderOptions, ScatterMap,
};
use std::num::NonZeroU32;
use std::path::Path;
use std::time::Instant;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const DOUBLE_CLICK_MS: f64 = 400.0;

fn main() {
    // Arg: optional points CSV (id,label,x,y)
    let points = match std::env::args().nth(1) {
        Some(raw) => {
            let loaded = load_points_csv(Path::new(&raw));
            if loaded.is_empty() {
                eprintln!("no points loaded from {raw}");
                return;
            }
            loaded
        }
        None => sample_points(),
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Scatter Map - Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let start = Instant::now();
    let now_ms = |start: Instant| start.elapsed().as_secs_f64() * 1000.0;

    let mut size = window.inner_size();
    let mut map = ScatterMap::new(size.width.max(1) as f32, size.height.max(1) as f32);
    map.set_axis_labels(AxisLabels::new("Dimension 1", "Dimension 2"));
    map.set_points(points, now_ms(start));

    let mut opts = RenderOptions::default();
    let themes = plot_core::theme::presets();
    let mut theme_idx = 0usize;

    // Pointer state fed into the map's handlers
    let mut cursor: (f32, f32) = (0.0, 0.0);
    let mut modifiers = Modifiers::NONE;
    let mut last_left_press: Option<((f32, f32), f64)> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    map.resize(size.width.max(1) as f32, size.height.max(1) as f32, now_ms(start));
                }
                WindowEvent::ModifiersChanged(state) => {
                    modifiers = Modifiers { ctrl: state.ctrl(), shift: state.shift() };
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = (position.x as f32, position.y as f32);
                    map.on_pointer_move(cursor.0, cursor.1, now_ms(start));
                }
                WindowEvent::CursorLeft { .. } => {
                    map.on_pointer_leave(now_ms(start));
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    let now = now_ms(start);
                    let button = match button {
                        MouseButton::Left => PointerButton::Left,
                        MouseButton::Middle => PointerButton::Middle,
                        MouseButton::Right => PointerButton::Right,
                        MouseButton::Other(_) => return,
                    };
                    match state {
                        ElementState::Pressed => {
                            if button == PointerButton::Left && !modifiers.ctrl {
                                if let Some((pos, at)) = last_left_press {
                                    let close = (pos.0 - cursor.0).abs() < 4.0
                                        && (pos.1 - cursor.1).abs() < 4.0;
                                    if close && now - at < DOUBLE_CLICK_MS {
                                        last_left_press = None;
                                        map.on_double_click(now);
                                        return;
                                    }
                                }
                                last_left_press = Some((cursor, now));
                            }
                            map.on_pointer_down(cursor.0, cursor.1, button, modifiers, now);
                        }
                        ElementState::Released => {
                            if let Some(PlotEvent::PointSelected { point, position }) =
                                map.on_pointer_up(cursor.0, cursor.1, now)
                            {
                                println!(
                                    "selected '{}' ({}) at ({:.0}, {:.0})",
                                    point.label, point.id, position.0, position.1
                                );
                                map.set_selected(Some(&point.id), now);
                            }
                        }
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    // Wheel up zooms in
                    let dy = match delta {
                        MouseScrollDelta::LineDelta(_, y) => -y,
                        MouseScrollDelta::PixelDelta(p) => -(p.y as f32),
                    };
                    if dy != 0.0 {
                        map.on_wheel(cursor.0, cursor.1, dy, now_ms(start));
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state != ElementState::Pressed {
                        return;
                    }
                    let now = now_ms(start);
                    match input.virtual_keycode {
                        Some(VirtualKeyCode::Equals | VirtualKeyCode::Plus) => map.zoom_in(now),
                        Some(VirtualKeyCode::Minus) => map.zoom_out(now),
                        Some(VirtualKeyCode::R | VirtualKeyCode::Key0) => map.reset_view(now),
                        Some(VirtualKeyCode::Escape) => map.set_selected(None, now),
                        Some(VirtualKeyCode::T) => {
                            theme_idx = (theme_idx + 1) % themes.len();
                            opts.theme = themes[theme_idx];
                        }
                        _ => {}
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let now = now_ms(start);
                map.tick(now);

                let w = size.width.max(1);
                let h = size.height.max(1);
                if let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) {
                    surface.resize(nw, nh).ok();
                }

                let Ok((rgba, _, _, _)) = map.render_to_rgba8(&opts, now) else { return };
                let Ok(mut frame) = surface.buffer_mut() else { return };
                let max_px = frame.len().min(rgba.len() / 4);
                for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                    let r = px[0] as u32;
                    let g = px[1] as u32;
                    let b = px[2] as u32;
                    frame[i] = (r << 16) | (g << 8) | b;
                }
                if let Err(e) = frame.present() {
                    eprintln!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}

fn load_points_csv(path: &Path) -> Vec<Point> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .expect("open csv");
    let headers = rdr
        .headers()
        .expect("headers")
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };
    let i_id = idx(&["id", "key"]);
    let i_label = idx(&["label", "name", "title"]);
    let i_x = idx(&["x", "dim1"]);
    let i_y = idx(&["y", "dim2"]);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let Ok(rec) = rec else { continue };
        let get = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).map(str::trim);
        let id = get(i_id)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| format!("row-{row}"));
        let label = get(i_label).unwrap_or("").to_owned();
        let mut point = Point::new(id, label);
        point.x = get(i_x).and_then(|s| s.parse().ok());
        point.y = get(i_y).and_then(|s| s.parse().ok());
        out.push(point);
    }
    out
}

fn sample_points() -> Vec<Point> {
    vec![
        Point::with_coords("apple", "Apple", 6.2, 7.1),
        Point::with_coords("banana", "Banana", 8.4, 2.3),
        Point::with_coords("carrot", "Carrot", 3.1, 9.0),
        Point::with_coords("date", "Date", 9.6, 1.2),
        Point::with_coords("endive", "Endive", 1.4, 6.5),
        Point::with_coords("fig", "Fig", 7.8, 4.4),
        Point::with_coords("grape", "Grape", 5.5, 5.0),
        Point::with_coords("haw", "Hawthorn", 2.9, 2.2),
    ]
}
