use crate::models::bs::PricingParams;

/// One-row key/value summary of the five base parameters, in display order.
///
/// The labels and their order match the tabular display on the dashboard;
/// values are formatted the way the cards show them (prices and rates to two
/// decimals, days as an integer).
pub fn parameter_summary(params: &PricingParams) -> Vec<(&'static str, String)> {
    vec![
        (
            "Current Asset Price",
            format!("{:.2}", params.underlying_price),
        ),
        ("Strike Price", format!("{:.2}", params.strike_price)),
        ("Volatility", format!("{:.2}", params.volatility)),
        ("Time to Maturity (Days)", params.days_to_exp.to_string()),
        ("Risk-Free Rate", format!("{:.2}", params.risk_free_rate)),
    ]
}
