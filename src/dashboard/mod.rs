// src/dashboard/mod.rs

//! The in-process boundary toward the dashboard host.
//!
//! The host reads its current widget values, builds a [`PricingParams`], and
//! calls back into this module on every render cycle; nothing here holds
//! state between calls. Widget bounds and heatmap seeding are configurable
//! through [`DashboardConfig`].

pub mod config;
pub mod summary;

pub use config::{DashboardConfig, HeatmapBounds, WidgetSpec};
pub use summary::parameter_summary;

use crate::error::Result;
use crate::models::bs::{price, OptionType, PricingParams};

/// The two scalar outputs the dashboard shows as cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceCards {
    pub call: f64,
    pub put: f64,
}

/// Prices both sides of the contract for card display.
pub fn price_cards(params: &PricingParams) -> Result<PriceCards> {
    Ok(PriceCards {
        call: price(params, OptionType::Call)?,
        put: price(params, OptionType::Put)?,
    })
}
