// src/render/mod.rs

//! SVG rendering of the sensitivity heatmaps.
//!
//! The plotting surface receives a price table plus its axis label arrays
//! and a color-scale identifier, and draws an annotated heatmap.

pub mod heatmap;

pub use heatmap::render_heatmap;

use plotters::style::RGBColor;

/// Color-scale identifier handed to the plotting surface.
///
/// `RdYlGn` is the dashboard default: low prices red, high prices green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorScale {
    #[default]
    RdYlGn,
    Viridis,
}

impl ColorScale {
    fn anchors(&self) -> &'static [(u8, u8, u8)] {
        match self {
            ColorScale::RdYlGn => &[(215, 48, 39), (254, 224, 139), (26, 152, 80)],
            ColorScale::Viridis => &[(68, 1, 84), (33, 145, 140), (253, 231, 37)],
        }
    }

    /// Maps a normalized value in [0, 1] onto the scale by piecewise-linear
    /// interpolation between anchor colors. Out-of-range values clamp.
    pub fn sample(&self, t: f64) -> RGBColor {
        let anchors = self.anchors();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

        let scaled = t * (anchors.len() - 1) as f64;
        let idx = (scaled.floor() as usize).min(anchors.len() - 2);
        let frac = scaled - idx as f64;

        let (r0, g0, b0) = anchors[idx];
        let (r1, g1, b1) = anchors[idx + 1];
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;

        RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }
}
