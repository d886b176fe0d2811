// src/grid/mod.rs

//! Grid evaluation for the sensitivity heatmaps.
//!
//! There is no algorithm here beyond iteration: each cell is the pricer
//! invoked once with that cell's spot/volatility pair, with strike, expiry,
//! and rate shared across the whole table.

pub mod types;

pub use types::{GridConfig, GridRange, PriceGrid, SensitivityGrids, DEFAULT_GRID_STEPS};

use crate::error::Result;
use crate::models::bs::{price, OptionType, PricingParams};

/// Ascending, endpoint-inclusive linear interpolation between `min` and `max`.
pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![min];
    }

    let step = (max - min) / (count - 1) as f64;
    let mut points: Vec<f64> = (0..count).map(|i| min + step * i as f64).collect();
    // Pin the last point so accumulated rounding never drifts the endpoint.
    points[count - 1] = max;
    points
}

/// Evaluates one price table over the spot × volatility Cartesian product.
///
/// Row `i` holds the prices at `spots[i]` across all volatilities, so
/// `values[i][j]` pairs with `spots[i]` / `vols[j]` positionally. Cell order
/// matches the generating sequences exactly (both ascending).
pub fn evaluate_grid(
    params: &PricingParams,
    config: &GridConfig,
    option_type: OptionType,
) -> Result<PriceGrid> {
    params.validate()?;
    config.validate()?;

    let spots = linspace(config.spot.min, config.spot.max, config.steps);
    let vols = linspace(config.vol.min, config.vol.max, config.steps);

    let mut values = Vec::with_capacity(spots.len());
    for &spot in &spots {
        let mut row = Vec::with_capacity(vols.len());
        for &vol in &vols {
            let cell_params = params.with_spot_and_vol(spot, vol);
            row.push(price(&cell_params, option_type)?);
        }
        values.push(row);
    }

    Ok(PriceGrid {
        spots,
        vols,
        values,
    })
}

/// Evaluates the call and put tables the dashboard renders side by side.
pub fn sensitivity_grids(params: &PricingParams, config: &GridConfig) -> Result<SensitivityGrids> {
    Ok(SensitivityGrids {
        call: evaluate_grid(params, config, OptionType::Call)?,
        put: evaluate_grid(params, config, OptionType::Put)?,
    })
}
