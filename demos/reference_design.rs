//! Solves the reference heat-sink design and checks it against the published
//! answer.
//!
//! Optional flat JSON parameters can be passed as the first argument:
//!
//! ```text
//! cargo run --example reference_design -- '{"q_w": 95.0, "air_velocity_m_s": 2.0}'
//! ```

use std::{env, error::Error};

use serde_json::{Map, Value};
use twine_heatsink::models::thermal::heat_sink::{
    Inputs, Reference, Tolerances, compare, solve,
};

fn main() -> Result<(), Box<dyn Error>> {
    let params: Map<String, Value> = match env::args().nth(1) {
        Some(arg) => serde_json::from_str(&arg)?,
        None => Map::new(),
    };

    let inputs = Inputs::from_params(&params)?;
    let results = solve(&inputs)?;

    println!("inputs:");
    for (key, value) in inputs.to_params() {
        println!("  {key:<18} {value}");
    }

    println!("results:");
    for (key, value) in results.to_params() {
        println!("  {key:<18} {value}");
    }

    let report = compare(&results, &Reference::published(), Tolerances::default());
    println!("published reference:");
    for check in report.checks() {
        println!(
            "  {:<14} computed={:.4} reference={:.4} diff={:.4} tol={} {}",
            check.metric.key(),
            check.computed,
            check.reference,
            check.abs_diff,
            check.tolerance,
            if check.passed { "PASS" } else { "FAIL" },
        );
    }

    Ok(())
}
