use anyhow::Result;
use options_lib::{default_configs, implied_vol_with_config, IvParams, IvSolverConfig, OptionType};

fn main() -> Result<()> {
    let params = IvParams {
        option_type: OptionType::Put,
        s: 100.0,
        k: 90.0,
        t: 0.25,
        r: 0.03,
        q: 0.0,
        market_price: 1.35,
    };

    println!("Options-lib Solver Configuration Examples\n");

    let configs = [
        ("Standard", "General use", default_configs::standard()),
        ("Precise", "Research, model validation", default_configs::precise()),
        ("Fast", "Interactive recalculation", default_configs::fast()),
    ];

    for (i, (name, use_case, config)) in configs.iter().enumerate() {
        println!("{}. {} Configuration:", i + 1, name);
        println!("   Price tolerance: {:.1e}", config.price_tolerance);
        println!("   Newton-Raphson budget: {}", config.max_newton_iterations);
        println!("   Bisection budget: {}", config.max_bisection_iterations);
        println!("   Bracket: [{}, {}]", config.vol_lower, config.vol_upper);
        println!("   Use case: {}", use_case);

        let result = implied_vol_with_config(&params, config);
        match (result.implied_vol, result.method) {
            (Some(vol), Some(method)) => {
                println!("   Solved IV: {:.8} via {} in {} iterations\n", vol, method, result.iterations)
            }
            _ => println!("   Failed: {}\n", result.error.unwrap_or_default()),
        }
    }

    // Overrides from TOML; omitted fields keep their defaults
    let config = IvSolverConfig::from_toml_str(
        r#"
        initial_guess = 0.2
        max_newton_iterations = 8
        vol_upper = 3.0
        "#,
    )?;
    println!("4. Custom Configuration (TOML):");
    println!("   {:?}", config);

    Ok(())
}
