//! Named strategy templates.
//!
//! Templates are quoted on an underlying of 100 with 30-day legs. Covered call
//! and protective put carry their stock exposure as a synthetic long stock
//! (long call plus short put at the money), so the whole position is analysable
//! with option legs alone.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::types::{OptionLeg, Position, Strategy};
use crate::models::types::OptionType;

/// Underlying price the templates are quoted on.
pub const TEMPLATE_UNDERLYING: f64 = 100.0;

fn call(id: &str, position: Position, strike: f64, premium: f64) -> OptionLeg {
    OptionLeg::new(id, OptionType::Call, position, strike, premium)
}

fn put(id: &str, position: Position, strike: f64, premium: f64) -> OptionLeg {
    OptionLeg::new(id, OptionType::Put, position, strike, premium)
}

fn synthetic_stock() -> [OptionLeg; 2] {
    [
        call("stock-call", Position::Long, 100.0, 3.0),
        put("stock-put", Position::Short, 100.0, 2.6),
    ]
}

fn build_presets() -> BTreeMap<&'static str, Strategy> {
    use Position::{Long, Short};

    let template = |name: &str, legs: Vec<OptionLeg>| Strategy::new(name, legs, TEMPLATE_UNDERLYING);

    let mut presets = BTreeMap::new();
    presets.insert(
        "covered-call",
        template(
            "Covered Call",
            [
                synthetic_stock().to_vec(),
                vec![call("short-call", Short, 105.0, 1.2)],
            ]
            .concat(),
        ),
    );
    presets.insert(
        "protective-put",
        template(
            "Protective Put",
            [
                synthetic_stock().to_vec(),
                vec![put("long-put", Long, 95.0, 1.0)],
            ]
            .concat(),
        ),
    );
    presets.insert(
        "bull-call-spread",
        template(
            "Bull Call Spread",
            vec![
                call("long-call", Long, 100.0, 4.0),
                call("short-call", Short, 110.0, 1.5),
            ],
        ),
    );
    presets.insert(
        "bear-put-spread",
        template(
            "Bear Put Spread",
            vec![
                put("long-put", Long, 100.0, 4.0),
                put("short-put", Short, 90.0, 1.2),
            ],
        ),
    );
    presets.insert(
        "iron-condor",
        template(
            "Iron Condor",
            vec![
                put("long-put", Long, 90.0, 0.8),
                put("short-put", Short, 95.0, 2.0),
                call("short-call", Short, 105.0, 2.0),
                call("long-call", Long, 110.0, 0.2),
            ],
        ),
    );
    presets.insert(
        "straddle",
        template(
            "Long Straddle",
            vec![
                call("long-call", Long, 100.0, 4.0),
                put("long-put", Long, 100.0, 4.0),
            ],
        ),
    );
    presets.insert(
        "strangle",
        template(
            "Long Strangle",
            vec![
                call("long-call", Long, 105.0, 2.0),
                put("long-put", Long, 95.0, 1.8),
            ],
        ),
    );
    presets.insert(
        "butterfly",
        template(
            "Long Call Butterfly",
            vec![
                call("lower-call", Long, 95.0, 6.5),
                call("middle-calls", Short, 100.0, 3.5).with_quantity(2),
                call("upper-call", Long, 105.0, 1.5),
            ],
        ),
    );
    presets
}

/// All templates keyed by preset name (`"iron-condor"`, `"straddle"`, ...).
pub fn strategy_presets() -> &'static BTreeMap<&'static str, Strategy> {
    static PRESETS: OnceLock<BTreeMap<&'static str, Strategy>> = OnceLock::new();
    PRESETS.get_or_init(build_presets)
}

pub fn preset(key: &str) -> Option<&'static Strategy> {
    strategy_presets().get(key)
}

/// Copy of a template with strikes and premiums rescaled to `underlying_price`.
pub fn instantiate_preset(key: &str, underlying_price: f64) -> Option<Strategy> {
    let template = preset(key)?;
    let scale = underlying_price / TEMPLATE_UNDERLYING;

    let legs = template
        .legs
        .iter()
        .map(|leg| OptionLeg {
            strike: leg.strike * scale,
            premium: leg.premium * scale,
            ..leg.clone()
        })
        .collect();

    Some(Strategy::new(template.name.clone(), legs, underlying_price))
}
