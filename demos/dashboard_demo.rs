// demos/dashboard_demo.rs
// Walks the whole dashboard page flow without a UI host: config, parameter
// summary, price cards, sensitivity grids, SVG heatmaps, CSV export.
//
// Usage:
//     cargo run --example dashboard_demo [config.toml]
//
// With no argument the documented widget defaults are used. Output files
// (call_heatmap.svg, put_heatmap.svg, call_grid.csv, put_grid.csv) are
// written to the working directory.

use std::env;
use std::fs::File;

use anyhow::Result;
use optionboard_lib::{
    parameter_summary, price_cards, render_heatmap, sensitivity_grids, DashboardConfig,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = match args.get(1) {
        Some(path) => {
            println!("Loading dashboard config from {}", path);
            DashboardConfig::load(path)?
        }
        None => DashboardConfig::default(),
    };

    let params = config.initial_params()?;

    println!("Black-Scholes Pricing Model");
    println!("===========================\n");

    // The one-row parameter summary the host shows as a table
    for (label, value) in parameter_summary(&params) {
        println!("  {:<26} {}", label, value);
    }

    // The two price cards
    let cards = price_cards(&params)?;
    println!("\n  Call Option Price: ${:.2}", cards.call);
    println!("  Put Option Price:  ${:.2}", cards.put);

    // Heatmap grids seeded around the current spot and volatility
    let grid_config = config.heatmap.grid_for(&params);
    println!(
        "\nHeatmap ranges: spot [{:.2}, {:.2}], vol [{:.3}, {:.3}], {}x{} cells",
        grid_config.spot.min,
        grid_config.spot.max,
        grid_config.vol.min,
        grid_config.vol.max,
        grid_config.steps,
        grid_config.steps
    );

    let grids = sensitivity_grids(&params, &grid_config)?;

    let scale = config.heatmap.color_scale;
    render_heatmap(&grids.call, "Call Price", scale, "call_heatmap.svg")?;
    render_heatmap(&grids.put, "Put Price", scale, "put_heatmap.svg")?;
    println!("Heatmaps saved to call_heatmap.svg and put_heatmap.svg");

    grids.call.write_csv(File::create("call_grid.csv")?)?;
    grids.put.write_csv(File::create("put_grid.csv")?)?;
    println!("Price tables saved to call_grid.csv and put_grid.csv");

    // Corner check mirroring the table display: cheapest call bottom-left,
    // priciest top-right
    let (call_min, call_max) = grids.call.value_range();
    println!(
        "\nCall table spans ${:.2} .. ${:.2}; put table spans ${:.2} .. ${:.2}",
        call_min,
        call_max,
        grids.put.value_range().0,
        grids.put.value_range().1
    );

    Ok(())
}
