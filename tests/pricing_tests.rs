use optionboard_lib::{price, OptionType, PricingError, PricingParams};
use statrs::distribution::{ContinuousCDF, Normal};

/// Scenarios shared by the parity and reference checks: a mix of moneyness,
/// expiry, rate, and volatility levels around the dashboard defaults.
fn scenario_params() -> Vec<PricingParams> {
    vec![
        PricingParams::new(100.0, 100.0, 30, 0.06, 0.20).unwrap(),
        PricingParams::new(90.0, 100.0, 30, 0.06, 0.18).unwrap(),
        PricingParams::new(110.0, 100.0, 30, 0.06, 0.22).unwrap(),
        PricingParams::new(100.0, 80.0, 7, 0.01, 0.45).unwrap(),
        PricingParams::new(100.0, 120.0, 365, 0.10, 0.30).unwrap(),
        PricingParams::new(42.0, 40.0, 182, 0.03, 0.55).unwrap(),
        PricingParams::new(3.5, 4.0, 60, 0.00, 0.80).unwrap(),
    ]
}

/// Independent evaluation of the closed form using statrs' normal CDF, as a
/// reference implementation for the libm-based pricer.
fn reference_price(params: &PricingParams, option_type: OptionType) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    let s = params.underlying_price;
    let k = params.strike_price;
    let r = params.risk_free_rate;
    let t = params.years_to_exp();
    let sigma = params.volatility;

    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt());
    let d2 = d1 - sigma * t.sqrt();

    match option_type {
        OptionType::Call => s * normal.cdf(d1) - k * (-r * t).exp() * normal.cdf(d2),
        OptionType::Put => k * (-r * t).exp() * normal.cdf(-d2) - s * normal.cdf(-d1),
    }
}

/// Concrete scenario from the dashboard defaults: spot=100, strike=100,
/// 30 days, 6% rate, 20% vol. Reference values computed independently from
/// the closed form (call 2.5359, put 2.0440).
#[test]
fn test_reference_scenario() {
    let params = PricingParams::new(100.0, 100.0, 30, 0.06, 0.20).unwrap();

    let call = price(&params, OptionType::Call).unwrap();
    let put = price(&params, OptionType::Put).unwrap();
    println!("ATM 30d scenario: call={:.4}, put={:.4}", call, put);

    assert!(
        (call - 2.5359).abs() < 2e-3,
        "call {} should be ~2.5359",
        call
    );
    assert!((put - 2.0440).abs() < 2e-3, "put {} should be ~2.0440", put);
}

/// The pricer must agree with an independent statrs-based evaluation of the
/// same closed form across all scenarios.
#[test]
fn test_agrees_with_reference_implementation() {
    for params in scenario_params() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let ours = price(&params, option_type).unwrap();
            let reference = reference_price(&params, option_type);
            assert!(
                (ours - reference).abs() < 1e-8,
                "{} price {} deviates from reference {} for {:?}",
                option_type,
                ours,
                reference,
                params
            );
        }
    }
}

/// Put-call parity: call - put = S - K * exp(-r*t) for all valid tuples.
#[test]
fn test_put_call_parity() {
    for params in scenario_params() {
        let call = price(&params, OptionType::Call).unwrap();
        let put = price(&params, OptionType::Put).unwrap();
        let parity =
            params.underlying_price - params.strike_price * (-params.risk_free_rate * params.years_to_exp()).exp();

        println!(
            "S={:.1} K={:.1} d={}: C-P={:.6}, parity={:.6}",
            params.underlying_price,
            params.strike_price,
            params.days_to_exp,
            call - put,
            parity
        );
        assert!(
            ((call - put) - parity).abs() < 1e-9,
            "parity violated for {:?}",
            params
        );
    }
}

/// Call prices are non-decreasing in spot, put prices non-increasing,
/// holding everything else fixed.
#[test]
fn test_monotonicity_in_spot() {
    let base = PricingParams::default();

    let mut prev_call = f64::NEG_INFINITY;
    let mut prev_put = f64::INFINITY;
    let mut spot = 60.0;
    while spot <= 140.0 {
        let params = base.with_spot_and_vol(spot, base.volatility);
        let call = price(&params, OptionType::Call).unwrap();
        let put = price(&params, OptionType::Put).unwrap();

        assert!(
            call >= prev_call,
            "call not monotone at spot {}: {} < {}",
            spot,
            call,
            prev_call
        );
        assert!(
            put <= prev_put,
            "put not monotone at spot {}: {} > {}",
            spot,
            put,
            prev_put
        );

        prev_call = call;
        prev_put = put;
        spot += 2.5;
    }
}

/// With spot=strike and zero rate, the call premium collapses toward the
/// intrinsic value (zero) as time and volatility shrink.
#[test]
fn test_atm_short_expiry_limit() {
    let params = PricingParams::new(100.0, 100.0, 1, 0.0, 0.01).unwrap();
    let call = price(&params, OptionType::Call).unwrap();
    let put = price(&params, OptionType::Put).unwrap();

    println!("1-day ATM, 1% vol: call={:.6}, put={:.6}", call, put);
    assert!(call >= 0.0 && call < 0.05, "call {} should be near zero", call);
    // Zero rate and spot=strike make the two sides symmetric
    assert!((call - put).abs() < 1e-12);
}

/// Deep ITM calls converge to the discounted forward intrinsic value,
/// deep OTM calls to zero.
#[test]
fn test_deep_moneyness_limits() {
    let itm = PricingParams::new(200.0, 100.0, 30, 0.06, 0.20).unwrap();
    let call_itm = price(&itm, OptionType::Call).unwrap();
    let bound = 200.0 - 100.0 * (-0.06 * itm.years_to_exp()).exp();
    assert!(
        (call_itm - bound).abs() < 1e-3,
        "deep ITM call {} should approach {}",
        call_itm,
        bound
    );

    let otm = PricingParams::new(50.0, 100.0, 30, 0.06, 0.20).unwrap();
    let call_otm = price(&otm, OptionType::Call).unwrap();
    assert!(
        call_otm >= 0.0 && call_otm < 1e-6,
        "deep OTM call {} should be ~0",
        call_otm
    );
}

/// Premiums are never negative for valid inputs.
#[test]
fn test_non_negative_output() {
    for params in scenario_params() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let premium = price(&params, option_type).unwrap();
            assert!(
                premium >= 0.0,
                "{} premium {} is negative for {:?}",
                option_type,
                premium,
                params
            );
        }
    }
}

/// Zero volatility and zero days to expiry fail with InvalidInput instead of
/// dividing by zero.
#[test]
fn test_degenerate_inputs_rejected() {
    let zero_vol = PricingParams {
        volatility: 0.0,
        ..PricingParams::default()
    };
    match price(&zero_vol, OptionType::Call) {
        Err(PricingError::InvalidInput { message }) => {
            println!("zero vol rejected: {}", message);
            assert!(message.contains("volatility"));
        }
        other => panic!("expected InvalidInput for zero vol, got {:?}", other),
    }

    let zero_days = PricingParams {
        days_to_exp: 0,
        ..PricingParams::default()
    };
    match price(&zero_days, OptionType::Put) {
        Err(PricingError::InvalidInput { message }) => {
            assert!(message.contains("days"));
        }
        other => panic!("expected InvalidInput for zero days, got {:?}", other),
    }
}

/// The string boundary rejects anything outside {call, put}.
#[test]
fn test_option_type_boundary() {
    assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
    assert_eq!("Put".parse::<OptionType>().unwrap(), OptionType::Put);

    match "butterfly".parse::<OptionType>() {
        Err(PricingError::InvalidInput { message }) => {
            assert!(message.contains("butterfly"));
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

/// Pricing is a pure function: repeated calls with the same bundle return
/// bit-identical results.
#[test]
fn test_deterministic() {
    let params = PricingParams::default();
    let first = price(&params, OptionType::Call).unwrap();
    for _ in 0..100 {
        assert_eq!(first, price(&params, OptionType::Call).unwrap());
    }
}
