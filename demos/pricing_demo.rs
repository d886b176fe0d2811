// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing across a few scenarios
//!
//! This example shows how to:
//! 1. Build validated pricing inputs
//! 2. Price the call and put side of each contract
//! 3. Check put-call parity on the results

use anyhow::Result;
use optionboard_lib::{price, OptionType, PricingParams};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    // (spot, strike, days, rate, vol) scenarios around the dashboard default
    let scenarios = vec![
        (100.0, 100.0, 30, 0.06, 0.20),
        (95.0, 100.0, 30, 0.06, 0.20),
        (105.0, 100.0, 30, 0.06, 0.20),
        (100.0, 100.0, 7, 0.06, 0.20),
        (100.0, 100.0, 365, 0.06, 0.20),
        (100.0, 100.0, 30, 0.06, 0.35),
    ];

    println!(
        "\n{:<8} {:<8} {:<6} {:<6} {:<6} {:<10} {:<10} {:<10}",
        "Spot", "Strike", "Days", "Rate", "Vol", "Call", "Put", "C-P"
    );
    println!("{}", "-".repeat(70));

    for (spot, strike, days, rate, vol) in scenarios {
        let params = PricingParams::new(spot, strike, days, rate, vol)?;
        let call = price(&params, OptionType::Call)?;
        let put = price(&params, OptionType::Put)?;

        println!(
            "{:<8.2} {:<8.2} {:<6} {:<6.2} {:<6.2} {:<10.4} {:<10.4} {:<10.4}",
            spot,
            strike,
            days,
            rate,
            vol,
            call,
            put,
            call - put
        );

        // Put-call parity: C - P = S - K * exp(-r*t)
        let parity = spot - strike * (-rate * params.years_to_exp()).exp();
        assert!(
            ((call - put) - parity).abs() < 1e-9,
            "parity violated: {} vs {}",
            call - put,
            parity
        );
    }

    println!("\nPut-call parity holds for every scenario.");

    // Degenerate inputs are rejected instead of pricing through a
    // divide-by-zero:
    println!("\nRejection examples:");
    for (label, result) in [
        (
            "zero volatility",
            PricingParams::new(100.0, 100.0, 30, 0.06, 0.0),
        ),
        (
            "zero days to expiry",
            PricingParams::new(100.0, 100.0, 0, 0.06, 0.20),
        ),
    ] {
        match result {
            Ok(_) => println!("  {}: unexpectedly accepted", label),
            Err(e) => println!("  {}: {}", label, e),
        }
    }

    Ok(())
}
