use std::path::Path;

use anyhow::{bail, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::ColorScale;
use crate::grid::PriceGrid;

const CHART_SIZE: (u32, u32) = (800, 600);

/// Tick label for an axis of cell indices: integer ticks show the value of
/// the matching grid line, everything else stays blank.
fn axis_label(axis: &[f64], coord: f64, precision: usize) -> String {
    if coord < 0.0 || (coord - coord.round()).abs() > 1e-9 {
        return String::new();
    }
    match axis.get(coord.round() as usize) {
        Some(value) => format!("{:.*}", precision, value),
        None => String::new(),
    }
}

/// Renders one price table as an annotated SVG heatmap.
///
/// The x axis carries the spot values and the y axis the volatility values,
/// in the same ascending order the grid evaluator produced them; each cell
/// is filled from `scale` (normalized over the table's value range) and
/// annotated with the price rounded to two decimals.
pub fn render_heatmap(
    grid: &PriceGrid,
    title: &str,
    scale: ColorScale,
    path: impl AsRef<Path>,
) -> Result<()> {
    let n_spots = grid.spots.len();
    let n_vols = grid.vols.len();
    if n_spots == 0 || n_vols == 0 {
        bail!("cannot render an empty price grid");
    }

    let root = SVGBackend::new(path.as_ref(), CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..n_spots as f64, 0f64..n_vols as f64)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Spot Price")
        .y_desc("Volatility")
        .x_labels(n_spots + 1)
        .y_labels(n_vols + 1)
        .x_label_formatter(&|x| axis_label(&grid.spots, *x, 2))
        .y_label_formatter(&|y| axis_label(&grid.vols, *y, 3))
        .draw()?;

    let (min_px, max_px) = grid.value_range();
    // A flat table (all cells equal) still needs a defined fill.
    let span = (max_px - min_px).max(f64::EPSILON);

    for (i, row) in grid.values.iter().enumerate() {
        for (j, &px) in row.iter().enumerate() {
            let color = scale.sample((px - min_px) / span);
            chart.draw_series(std::iter::once(Rectangle::new(
                [(i as f64, j as f64), ((i + 1) as f64, (j + 1) as f64)],
                color.filled(),
            )))?;
        }
    }

    let annotation_style = ("sans-serif", 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    for (i, row) in grid.values.iter().enumerate() {
        for (j, &px) in row.iter().enumerate() {
            chart.draw_series(std::iter::once(Text::new(
                format!("{:.2}", px),
                (i as f64 + 0.5, j as f64 + 0.5),
                annotation_style.clone(),
            )))?;
        }
    }

    root.present()?;
    Ok(())
}
