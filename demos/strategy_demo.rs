//! Strategy presets: payoff at expiry, break-evens and current P/L
//!
//! Run with `RUST_LOG=debug` to see the valuation trace.

use anyhow::{bail, Result};
use options_lib::{
    analyze_strategy, instantiate_preset, pnl_curve, strategy_presets, validate_strategy,
    value_position, MarketScenario, PriceRange,
};
use tracing_subscriber::EnvFilter;

fn format_bound(value: Option<f64>) -> String {
    value.map_or_else(|| "unlimited".to_string(), |v| format!("{:.2}", v))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Strategy Presets");
    println!("================\n");

    for (key, strategy) in strategy_presets() {
        let analysis = analyze_strategy(strategy, &PriceRange::default_for(strategy.underlying_price));
        let break_evens: Vec<String> = analysis.break_evens.iter().map(|b| format!("{:.2}", b)).collect();

        println!("{} ({})", strategy.name, key);
        println!("  Net premium: {:+.2}", analysis.net_premium);
        println!("  Break-evens: [{}]", break_evens.join(", "));
        println!(
            "  Max profit: {}  Max loss: {}",
            format_bound(analysis.max_profit),
            format_bound(analysis.max_loss)
        );
        if let Some(ratio) = analysis.risk_reward_ratio {
            println!("  Reward/risk: {:.2}", ratio);
        }
        println!();
    }

    let spot = 250.0;
    let Some(condor) = instantiate_preset("iron-condor", spot) else {
        bail!("iron-condor preset is missing");
    };
    let errors = validate_strategy(&condor);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  {}", error);
        }
        bail!("{} failed validation", condor.name);
    }

    let scenario = MarketScenario {
        volatility: 0.22,
        days_elapsed: 10.0,
        ..MarketScenario::default()
    };

    println!("{} on {:.0}, 10 days in", condor.name, spot);
    let position = value_position(&condor.legs, spot, &scenario)?;
    for leg in &position.legs {
        println!(
            "  {:<12} value {:>7.3}  P/L {:>+7.3}",
            leg.id, leg.theoretical_value, leg.pnl
        );
    }
    let greeks = position.greeks.to_market_units();
    println!(
        "  Total P/L {:+.3}  delta {:+.4}  gamma {:+.5}  theta/day {:+.4}  vega/pt {:+.4}\n",
        position.total_pnl, greeks.delta, greeks.gamma, greeks.theta, greeks.vega
    );

    println!("{:>10} {:>12} {:>12}", "Price", "At expiry", "Today");
    for point in pnl_curve(&condor.legs, &PriceRange::around(spot, 0.15), 10, &scenario)? {
        println!(
            "{:>10.2} {:>12.3} {:>12.3}",
            point.price, point.expiry_payoff, point.current_pnl
        );
    }

    Ok(())
}
