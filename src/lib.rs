//! # Optionboard-Lib: Black-Scholes Pricing for Dashboard Hosts
//!
//! `optionboard-lib` computes Black-Scholes European option prices and
//! produces the data artifacts an interactive dashboard renders: a pair of
//! call/put price cards, a one-row parameter summary, and two-factor
//! (spot × volatility) sensitivity heatmaps.
//!
//! ## Core Features
//!
//! - **Closed-Form Pricing**: deterministic Black-Scholes call and put
//!   premiums with eager input validation (no NaN/Infinity ever escapes)
//! - **Sensitivity Grids**: 10×10 price tables over a spot × volatility
//!   Cartesian product, positionally aligned with their axis labels
//! - **Dashboard Surface**: configurable widget bounds (TOML), price cards,
//!   and the tabular parameter summary
//! - **SVG Heatmaps**: annotated heatmap rendering with RdYlGn/Viridis
//!   color scales
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use optionboard_lib::{
//!     price_cards, render_heatmap, sensitivity_grids, DashboardConfig, PricingParams,
//! };
//!
//! // Widget defaults: spot 100, strike 100, 30 days, 6% rate, 20% vol
//! let config = DashboardConfig::default();
//! let params = config.initial_params()?;
//!
//! // The two card outputs
//! let cards = price_cards(&params)?;
//! println!("Call ${:.2} / Put ${:.2}", cards.call, cards.put);
//!
//! // The two 10x10 heatmap tables, spot +/- 10 and vol +/- 0.02
//! let grids = sensitivity_grids(&params, &config.heatmap.grid_for(&params))?;
//! render_heatmap(
//!     &grids.call,
//!     "Call Price",
//!     config.heatmap.color_scale,
//!     "call_heatmap.svg",
//! )?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Scope
//!
//! Pricing is a pure function of its inputs: no state, no I/O, no market
//! data. American exercise, numerical (binomial/Monte Carlo) pricing, and
//! Greeks are out of scope.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod dashboard;
pub mod error;
pub mod grid;
pub mod models;
pub mod render;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Core pricing types and the pricer itself
pub use models::bs::{price, OptionType, PricingParams, DAYS_PER_YEAR};

// Error taxonomy
pub use error::{PricingError, Result};

// Grid evaluation
pub use grid::{
    evaluate_grid, linspace, sensitivity_grids, GridConfig, GridRange, PriceGrid,
    SensitivityGrids, DEFAULT_GRID_STEPS,
};

// Dashboard surface
pub use dashboard::{
    parameter_summary, price_cards, DashboardConfig, HeatmapBounds, PriceCards, WidgetSpec,
};

// Heatmap rendering
pub use render::{render_heatmap, ColorScale};
