// File: crates/demo/src/main.rs
// Summary: Demo loads a points CSV (id,label,x,y) and renders the scatter map at several view states to PNGs.

use anyhow::{Context, Result};
use plot_core::{AxisLabels, Modifiers, Point, PointerButton, RenderOptions, ScatterMap};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to built-in sample points
    let points = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            println!("Using input file: {}", path.display());
            load_points_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No CSV given; using built-in sample points");
            sample_points()
        }
    };
    println!("Loaded {} points", points.len());

    if points.is_empty() {
        anyhow::bail!("no points loaded - check headers/delimiter.");
    }

    let mut map = ScatterMap::new(1024.0, 640.0);
    map.set_axis_labels(AxisLabels::new("Dimension 1", "Dimension 2"));
    map.set_points(points, 0.0);

    let opts = RenderOptions::default();
    // Render after animations have settled
    let settled = 10_000.0;

    // 1) Base view: padded square domain over the full extents
    let out_base = out_name("base");
    map.render_to_png(&opts, settled, &out_base)?;
    println!("Wrote {}", out_base.display());

    // 2) Wheel-zoomed around the plot center
    for i in 0..4 {
        map.on_wheel(512.0, 320.0, -1.0, settled + i as f64 * 16.0);
    }
    let out_zoom = out_name("wheel_zoom");
    map.render_to_png(&opts, settled + 2_000.0, &out_zoom)?;
    println!("Wrote {} (scale {:.2}x)", out_zoom.display(), map.scale_factor());

    // 3) Panned with a middle-button drag
    map.on_pointer_down(512.0, 320.0, PointerButton::Middle, Modifiers::NONE, settled + 2_000.0);
    map.on_pointer_move(400.0, 260.0, settled + 2_016.0);
    map.on_pointer_up(400.0, 260.0, settled + 2_032.0);
    let out_pan = out_name("panned");
    map.render_to_png(&opts, settled + 4_000.0, &out_pan)?;
    println!("Wrote {}", out_pan.display());

    // 4) Reset plus a selected point
    map.reset_view(settled + 4_000.0);
    if let Some(first) = map.points().first().map(|p| p.id.clone()) {
        map.set_selected(Some(&first), settled + 4_000.0);
    }
    let out_reset = out_name("reset_selected");
    map.render_to_png(&opts, settled + 6_000.0, &out_reset)?;
    println!("Wrote {}", out_reset.display());

    Ok(())
}

/// Produce output file name like target/out/scatter_<suffix>.png.
/// `render_to_png` creates the directory when it writes.
fn out_name(suffix: &str) -> PathBuf {
    PathBuf::from("target/out").join(format!("scatter_{}.png", suffix))
}

/// Load points from a CSV with id/label/x/y columns (header names are matched
/// case-insensitively; rows with unparseable coordinates keep the point but
/// leave it coordinate-incomplete).
fn load_points_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

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

    let i_id = idx(&["id", "key", "name_id"]);
    let i_label = idx(&["label", "name", "title"]);
    let i_x = idx(&["x", "dim1", "map_x"]);
    let i_y = idx(&["y", "dim2", "map_y"]);

    if i_x.is_none() || i_y.is_none() {
        println!("Warning: could not find x/y columns; all points will be coordinate-incomplete.");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let get = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).map(str::trim);
        let parse = |i: Option<usize>| get(i).and_then(|s| s.parse::<f64>().ok());

        let id = get(i_id)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| format!("row-{row}"));
        let label = get(i_label).unwrap_or("").to_owned();

        let mut point = Point::new(id, label);
        point.x = parse(i_x);
        point.y = parse(i_y);
        out.push(point);
    }
    Ok(out)
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
