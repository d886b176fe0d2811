// src/models/bs/mod.rs

//! Black-Scholes pricing for European calls and puts.
//!
//! This is the entire computational core of optionboard: a closed-form
//! evaluation with eager input validation. Time to maturity is quoted in
//! calendar days and converted with an ACT/365 day count:
//!
//! d1 = (ln(S/K) + (r + σ²/2)·t) / (σ·√t)
//! d2 = d1 − σ·√t
//!
//! Call: S·Φ(d1) − K·e^(−r·t)·Φ(d2)
//! Put:  K·e^(−r·t)·Φ(−d2) − S·Φ(−d1)
//!
//! Implied-volatility solving and Greeks are intentionally omitted to keep
//! the lightweight focus of optionboard-lib.

use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, Result};

/// Day count convention: ACT/365.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Side of a European option contract.
///
/// The pricer matches exhaustively on this enum; the only way to introduce
/// an unsupported option type is through the string boundary in
/// [`OptionType::from_str`], which rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parse `"call"` / `"put"` (case-insensitive) from a host-supplied string.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(PricingError::invalid_input(format!(
                "option type must be \"call\" or \"put\", got: {}",
                other
            ))),
        }
    }
}

/// Value-type input bundle for a single pricing call.
///
/// Pricing is a pure function of this bundle: the same inputs always produce
/// the same premium, and no state survives the call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingParams {
    /// Current market price of the underlying asset
    pub underlying_price: f64,
    /// Strike price of the contract
    pub strike_price: f64,
    /// Time to maturity in calendar days (day count = ACT/365)
    pub days_to_exp: u32,
    /// Annualized risk-free rate (as decimal, e.g., 0.06 for 6%)
    pub risk_free_rate: f64,
    /// Annualized volatility (as decimal, e.g., 0.20 for 20%)
    pub volatility: f64,
}

impl Default for PricingParams {
    /// The parameter set the dashboard shows on first render.
    fn default() -> Self {
        Self {
            underlying_price: 100.0,
            strike_price: 100.0,
            days_to_exp: 30,
            risk_free_rate: 0.06,
            volatility: 0.20,
        }
    }
}

/// Helper function to validate pricing inputs before any arithmetic runs.
///
/// Zero volatility and zero days both make the time-scaled denominator of d1
/// vanish; they are rejected here instead of propagating NaN/Infinity.
fn validate_pricing_params(
    underlying_price: f64,
    strike_price: f64,
    days_to_exp: u32,
    risk_free_rate: f64,
    volatility: f64,
) -> Result<()> {
    if underlying_price <= 0.0 || !underlying_price.is_finite() {
        return Err(PricingError::invalid_input(format!(
            "underlying price (S={}) must be > 0 and finite",
            underlying_price
        )));
    }
    if strike_price <= 0.0 || !strike_price.is_finite() {
        return Err(PricingError::invalid_input(format!(
            "strike price (K={}) must be > 0 and finite",
            strike_price
        )));
    }
    if days_to_exp == 0 {
        return Err(PricingError::invalid_input(
            "days to expiry must be >= 1; an expired contract has no time value to price",
        ));
    }
    if !risk_free_rate.is_finite() {
        return Err(PricingError::invalid_input(format!(
            "risk-free rate (r={}) must be finite",
            risk_free_rate
        )));
    }
    if volatility <= 0.0 || !volatility.is_finite() {
        return Err(PricingError::invalid_input(format!(
            "volatility (sigma={}) must be > 0 and finite",
            volatility
        )));
    }
    Ok(())
}

impl PricingParams {
    /// Creates a new input bundle with validation.
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        days_to_exp: u32,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Result<Self> {
        validate_pricing_params(
            underlying_price,
            strike_price,
            days_to_exp,
            risk_free_rate,
            volatility,
        )?;

        Ok(Self {
            underlying_price,
            strike_price,
            days_to_exp,
            risk_free_rate,
            volatility,
        })
    }

    /// Validates the current parameter set.
    pub fn validate(&self) -> Result<()> {
        validate_pricing_params(
            self.underlying_price,
            self.strike_price,
            self.days_to_exp,
            self.risk_free_rate,
            self.volatility,
        )
    }

    /// Time to maturity in years (ACT/365).
    pub fn years_to_exp(&self) -> f64 {
        self.days_to_exp as f64 / DAYS_PER_YEAR
    }

    /// Copy of this bundle with spot and volatility replaced, keeping
    /// strike, expiry, and rate shared. The grid evaluator sweeps with this.
    pub fn with_spot_and_vol(&self, underlying_price: f64, volatility: f64) -> Self {
        Self {
            underlying_price,
            volatility,
            ..*self
        }
    }
}

/// Standard normal cumulative distribution function.
fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

/// The standardized intermediates of the Black-Scholes formula.
/// Callers must ensure sigma > 0 and t > 0.
#[allow(non_snake_case)]
fn d1_d2(S: f64, K: f64, r: f64, t: f64, sigma: f64) -> (f64, f64) {
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * t) / (sigma * t.sqrt());
    let d2 = d1 - sigma * t.sqrt();
    (d1, d2)
}

#[allow(non_snake_case)]
fn bs_call_price(S: f64, K: f64, r: f64, t: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, t, sigma);
    S * norm_cdf(d1) - K * (-r * t).exp() * norm_cdf(d2)
}

#[allow(non_snake_case)]
fn bs_put_price(S: f64, K: f64, r: f64, t: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, t, sigma);
    K * (-r * t).exp() * norm_cdf(-d2) - S * norm_cdf(-d1)
}

/// Theoretical premium of a European option under Black-Scholes assumptions.
///
/// Validates the bundle eagerly and fails with
/// [`PricingError::InvalidInput`] on a degenerate input (zero volatility,
/// zero days to expiry, non-positive spot or strike) rather than letting the
/// formula divide by zero. For valid inputs the premium is deterministic and
/// never negative.
///
/// # Example
///
/// ```rust
/// use optionboard_lib::{price, OptionType, PricingParams};
///
/// let params = PricingParams::new(100.0, 100.0, 30, 0.06, 0.20)?;
/// let call = price(&params, OptionType::Call)?;
/// let put = price(&params, OptionType::Put)?;
/// assert!(call > 0.0 && put > 0.0);
/// # Ok::<(), optionboard_lib::PricingError>(())
/// ```
pub fn price(params: &PricingParams, option_type: OptionType) -> Result<f64> {
    params.validate()?;

    let t = params.years_to_exp();
    let premium = match option_type {
        OptionType::Call => bs_call_price(
            params.underlying_price,
            params.strike_price,
            params.risk_free_rate,
            t,
            params.volatility,
        ),
        OptionType::Put => bs_put_price(
            params.underlying_price,
            params.strike_price,
            params.risk_free_rate,
            t,
            params.volatility,
        ),
    };

    // Floating-point cancellation in the far wings can surface a tiny
    // negative value; the theoretical premium is never below zero.
    Ok(premium.max(0.0))
}
