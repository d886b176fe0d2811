use std::io::Write;

use crate::error::{PricingError, Result};

/// Inclusive bounds of one heatmap axis; both endpoints are rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRange {
    pub min: f64,
    pub max: f64,
}

impl GridRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, axis: &str, require_positive_min: bool) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PricingError::invalid_range(format!(
                "{} range [{}, {}] must be finite",
                axis, self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(PricingError::invalid_range(format!(
                "{} range requires min < max, got [{}, {}]",
                axis, self.min, self.max
            )));
        }
        if require_positive_min && self.min <= 0.0 {
            return Err(PricingError::invalid_range(format!(
                "{} range must start above 0, got min={}",
                axis, self.min
            )));
        }
        Ok(())
    }
}

/// Configuration for a two-factor (spot × volatility) sensitivity grid.
///
/// Strike, expiry, and rate are shared across the whole grid; only spot and
/// volatility are swept.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Spot price axis (ascending, endpoint-inclusive)
    pub spot: GridRange,
    /// Volatility axis (ascending, endpoint-inclusive)
    pub vol: GridRange,
    /// Number of points per axis
    pub steps: usize,
}

/// Number of points per heatmap axis in the dashboard layout.
pub const DEFAULT_GRID_STEPS: usize = 10;

/// Lower clamps for seeded axes; both must stay strictly positive.
const SPOT_AXIS_FLOOR: f64 = 1.0;
const VOL_AXIS_FLOOR: f64 = 0.01;

impl GridConfig {
    /// Ranges seeded around the current inputs the way the dashboard seeds
    /// its heatmap widgets: spot ± 10.0, volatility ± 0.02, 10 steps.
    pub fn centered_on(underlying_price: f64, volatility: f64) -> Self {
        Self::with_spans(underlying_price, volatility, 10.0, 0.02, DEFAULT_GRID_STEPS)
    }

    /// Ranges seeded around the current inputs with explicit half-spans.
    pub fn with_spans(
        underlying_price: f64,
        volatility: f64,
        spot_span: f64,
        vol_span: f64,
        steps: usize,
    ) -> Self {
        Self {
            spot: GridRange::new(
                (underlying_price - spot_span).max(SPOT_AXIS_FLOOR),
                underlying_price + spot_span,
            ),
            vol: GridRange::new(
                (volatility - vol_span).max(VOL_AXIS_FLOOR),
                volatility + vol_span,
            ),
            steps,
        }
    }

    /// Validates both axis ranges and the step count.
    ///
    /// The spot and volatility axes must start above zero: every grid cell is
    /// priced through the validated pricer, and an axis touching zero would
    /// make whole rows or columns unpriceable.
    pub fn validate(&self) -> Result<()> {
        self.spot.validate("spot", true)?;
        self.vol.validate("volatility", true)?;
        if self.steps < 2 {
            return Err(PricingError::invalid_range(format!(
                "grid needs at least 2 steps per axis, got {}",
                self.steps
            )));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        let p = crate::models::bs::PricingParams::default();
        Self::centered_on(p.underlying_price, p.volatility)
    }
}

/// A two-dimensional table of option prices over spot × volatility.
///
/// `values[i][j]` is the premium at `spots[i]` / `vols[j]`. Both axes are
/// ascending, exactly as the generating sequences produced them; heatmap
/// axis labels rely on this positional correspondence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceGrid {
    pub spots: Vec<f64>,
    pub vols: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

impl PriceGrid {
    /// Smallest and largest cell value, for color scaling.
    pub fn value_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in &self.values {
            for &v in row {
                min = min.min(v);
                max = max.max(v);
            }
        }
        (min, max)
    }

    /// Writes the table as CSV: a volatility header row, then one row per
    /// spot with the spot value in the first column.
    pub fn write_csv<W: Write>(&self, writer: W) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["spot".to_string()];
        header.extend(self.vols.iter().map(|v| format!("{:.4}", v)));
        wtr.write_record(&header)?;

        for (spot, row) in self.spots.iter().zip(self.values.iter()) {
            let mut record = vec![format!("{:.4}", spot)];
            record.extend(row.iter().map(|px| format!("{:.4}", px)));
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

/// The pair of tables the dashboard renders side by side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityGrids {
    pub call: PriceGrid,
    pub put: PriceGrid,
}
