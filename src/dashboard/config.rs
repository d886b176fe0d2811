use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::grid::GridConfig;
use crate::models::bs::PricingParams;
use crate::render::ColorScale;

/// Documented bounds of one numeric input widget on the dashboard host.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WidgetSpec {
    /// Smallest value the widget accepts
    pub min: f64,
    /// Largest value the widget accepts (unbounded when absent)
    #[serde(default)]
    pub max: Option<f64>,
    /// Value shown on first render
    pub default: f64,
    /// Widget increment
    pub step: f64,
}

impl WidgetSpec {
    /// Snaps a host-supplied value into the documented range.
    pub fn clamp(&self, value: f64) -> f64 {
        let v = value.max(self.min);
        match self.max {
            Some(max) => v.min(max),
            None => v,
        }
    }
}

/// How the heatmap axes are seeded from the current inputs.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HeatmapBounds {
    /// Spot axis reaches this far on either side of the current spot
    #[serde(default = "default_spot_span")]
    pub spot_span: f64,
    /// Volatility axis reaches this far on either side of the current vol
    #[serde(default = "default_vol_span")]
    pub vol_span: f64,
    /// Points per axis
    #[serde(default = "default_heatmap_steps")]
    pub steps: usize,
    /// Color scale identifier handed to the plotting surface
    #[serde(default)]
    pub color_scale: ColorScale,
}

impl Default for HeatmapBounds {
    fn default() -> Self {
        Self {
            spot_span: default_spot_span(),
            vol_span: default_vol_span(),
            steps: default_heatmap_steps(),
            color_scale: ColorScale::default(),
        }
    }
}

impl HeatmapBounds {
    /// Grid configuration centered on the current spot and volatility.
    pub fn grid_for(&self, params: &PricingParams) -> GridConfig {
        GridConfig::with_spans(
            params.underlying_price,
            params.volatility,
            self.spot_span,
            self.vol_span,
            self.steps,
        )
    }
}

/// Full widget table of the dashboard: the five base parameter inputs plus
/// the heatmap seeding bounds.
///
/// Every field carries a default, so a partial TOML file (or an empty one)
/// deserializes to the documented widget table.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_spot_widget")]
    pub underlying_price: WidgetSpec,

    #[serde(default = "default_strike_widget")]
    pub strike_price: WidgetSpec,

    /// Days widget; integer-valued, expressed in the same widget shape
    #[serde(default = "default_days_widget")]
    pub days_to_exp: WidgetSpec,

    #[serde(default = "default_rate_widget")]
    pub risk_free_rate: WidgetSpec,

    #[serde(default = "default_vol_widget")]
    pub volatility: WidgetSpec,

    #[serde(default)]
    pub heatmap: HeatmapBounds,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            underlying_price: default_spot_widget(),
            strike_price: default_strike_widget(),
            days_to_exp: default_days_widget(),
            risk_free_rate: default_rate_widget(),
            volatility: default_vol_widget(),
            heatmap: HeatmapBounds::default(),
        }
    }
}

impl DashboardConfig {
    /// Parses a dashboard configuration from TOML, filling missing sections
    /// with the documented defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("failed to parse dashboard config TOML")
    }

    /// Loads a dashboard configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dashboard config {}", path.display()))?;
        Self::from_toml_str(&raw)
    }

    /// The pricing inputs shown on first render, built from widget defaults.
    pub fn initial_params(&self) -> crate::error::Result<PricingParams> {
        PricingParams::new(
            self.underlying_price.default,
            self.strike_price.default,
            self.days_to_exp.default as u32,
            self.risk_free_rate.default,
            self.volatility.default,
        )
    }
}

fn default_spot_widget() -> WidgetSpec {
    WidgetSpec {
        min: 0.0,
        max: None,
        default: 100.0,
        step: 0.01,
    }
}

fn default_strike_widget() -> WidgetSpec {
    WidgetSpec {
        min: 0.0,
        max: None,
        default: 100.0,
        step: 0.01,
    }
}

fn default_days_widget() -> WidgetSpec {
    WidgetSpec {
        min: 0.0,
        max: Some(730.0),
        default: 30.0,
        step: 1.0,
    }
}

fn default_rate_widget() -> WidgetSpec {
    WidgetSpec {
        min: 0.0,
        max: Some(0.20),
        default: 0.06,
        step: 0.01,
    }
}

fn default_vol_widget() -> WidgetSpec {
    WidgetSpec {
        min: 0.0,
        max: Some(0.99),
        default: 0.20,
        step: 0.01,
    }
}

fn default_spot_span() -> f64 {
    10.0
}

fn default_vol_span() -> f64 {
    0.02
}

fn default_heatmap_steps() -> usize {
    crate::grid::DEFAULT_GRID_STEPS
}
