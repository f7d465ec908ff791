use crate::gc::ratio::RatioFunc;
use anyhow::{anyhow, Result};
use plotters::prelude::*;
use std::path::Path;

/// Chart size in pixels
pub const PLOT_SIZE: (u32, u32) = (2000, 1000);

/// Split a series into runs of finite values, keyed by window index.
///
/// NaN (undefined) values end the current run, so the chart shows a gap
/// instead of interpolating across it.
pub fn finite_segments(ratios: &[f64]) -> Vec<Vec<(usize, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(usize, f64)> = Vec::new();
    for (idx, &v) in ratios.iter().enumerate() {
        if v.is_finite() {
            current.push((idx, v));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Chart line segments with values clamped into `y_range`.
///
/// Out-of-range values sit on the chart edge, like a fixed y-limit.
pub fn chart_points(ratios: &[f64], y_range: (f64, f64)) -> Vec<Vec<(usize, f64)>> {
    let (y_min, y_max) = y_range;
    finite_segments(ratios)
        .into_iter()
        .map(|segment| {
            segment
                .into_iter()
                .map(|(idx, v)| (idx, v.clamp(y_min, y_max)))
                .collect()
        })
        .collect()
}

/// Render the ratio series as an SVG line chart.
///
/// * `ratios` – scan output; x is the index into this slice.
/// * `func`   – selects title, y-bounds and y-label.
/// * `path`   – SVG file to write.
///
/// Values outside the y-bounds are clamped to the chart edge.
pub fn plot_series(ratios: &[f64], func: RatioFunc, path: &Path) -> Result<()> {
    let spec = func.spec();
    let (y_min, y_max) = spec.y_range;
    let x_max = ratios.len().max(1);

    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("drawing chart background: {}", e))?;

    let caption = format!("GC calculations: {}", spec.title);
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0usize..x_max, y_min..y_max)
        .map_err(|e| anyhow!("building chart axes: {}", e))?;

    chart
        .configure_mesh()
        .x_desc("Window")
        .y_desc(spec.y_label)
        .draw()
        .map_err(|e| anyhow!("drawing chart mesh: {}", e))?;

    for segment in chart_points(ratios, spec.y_range) {
        chart
            .draw_series(LineSeries::new(segment, &BLUE))
            .map_err(|e| anyhow!("drawing ratio series: {}", e))?;
    }

    root.present()
        .map_err(|e| anyhow!("writing chart to {}: {}", path.display(), e))?;
    Ok(())
}
