//! Black-Scholes-Merton pricing and implied volatility round trip
//!
//! This example shows how to:
//! 1. Price calls and puts across a strike ladder
//! 2. Read the Greeks in per-day / per-vol-point units
//! 3. Recover the volatility from the model prices

use anyhow::Result;
use options_lib::{
    bs_price_and_greeks, classify_moneyness, days_to_years, implied_vol, IvParams, OptionParams,
    OptionType,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Black-Scholes-Merton Pricing Demo");
    println!("=================================");

    let spot = 100.0;
    let t = days_to_years(45.0);
    let (r, q, sigma) = (0.04, 0.01, 0.28);

    println!("Spot: {:.2}  Expiry: 45 days ({:.4} years)", spot, t);
    println!("Rate: {:.2}%  Dividend yield: {:.2}%  Vol: {:.0}%\n", r * 100.0, q * 100.0, sigma * 100.0);

    println!(
        "{:<6} {:<8} {:<16} {:>10} {:>8} {:>8} {:>9} {:>8} {:>10}",
        "Type", "Strike", "Moneyness", "Price", "Delta", "Gamma", "Theta/d", "Vega/pt", "Solved IV"
    );
    println!("{}", "-".repeat(92));

    for option_type in [OptionType::Call, OptionType::Put] {
        for strike in [85.0, 95.0, 100.0, 105.0, 115.0] {
            let params = OptionParams::new(option_type, spot, strike, t, r, q, sigma);
            let (price, greeks) = bs_price_and_greeks(&params)?;
            let display = greeks.to_market_units();

            let iv = implied_vol(&IvParams {
                option_type,
                s: spot,
                k: strike,
                t,
                r,
                q,
                market_price: price,
            });
            let solved = match (iv.implied_vol, &iv.error) {
                (Some(vol), _) => format!("{:.4}", vol),
                (None, Some(error)) => error.clone(),
                (None, None) => "-".to_string(),
            };

            println!(
                "{:<6} {:<8.1} {:<16} {:>10.4} {:>8.4} {:>8.4} {:>9.4} {:>8.4} {:>10}",
                option_type.to_string(),
                strike,
                format!("{:?}", classify_moneyness(option_type, spot, strike)),
                price,
                display.delta,
                display.gamma,
                display.theta,
                display.vega,
                solved
            );
        }
    }

    println!("\nQuoting below intrinsic:");
    let result = implied_vol(&IvParams {
        option_type: OptionType::Call,
        s: spot,
        k: 80.0,
        t,
        r,
        q,
        market_price: 15.0,
    });
    println!("  error: {}", result.error.as_deref().unwrap_or("none"));

    Ok(())
}
