//! Junction temperature of a die on a finned, forced-air heat sink.
//!
//! Solving is a single forward pass with no iteration:
//!
//! 1. Geometry: die area, fin spacing, and wetted area.
//! 2. Convection: Reynolds number, flow regime, Nusselt number, and the
//!    convective coefficient.
//! 3. Resistances: junction-case, TIM, base conduction, and convection, summed
//!    in series.
//! 4. Temperature: ambient plus heat load times total resistance.
//!
//! The same inputs always produce bit-identical results.

mod convection;
mod error;
mod geometry;
mod inputs;
mod network;
mod results;

pub use convection::{Convection, FlowRegime, TRANSITION_REYNOLDS, nusselt};
pub use error::GeometryError;
pub use geometry::fin_spacing;
pub use inputs::{Air, Die, Inputs, Materials, Sink, Tim};
pub use network::Resistances;
pub use results::Results;

use log::trace;

/// Solves the heat sink resistance network.
///
/// # Errors
///
/// Returns [`GeometryError::TooFewFins`] if the sink has fewer than two fins.
/// No other input is range-checked.
pub fn solve(inputs: &Inputs) -> Result<Results, GeometryError> {
    let sink = &inputs.sink;

    let die_area = geometry::die_area(&inputs.die);
    let fin_spacing = fin_spacing(sink.width, sink.n_fins, sink.fin_thickness)?;
    let convective_area = geometry::convective_area(sink);

    let convection = Convection::evaluate(&inputs.air, fin_spacing, sink.length);

    let resistances =
        Resistances::evaluate(inputs, die_area, convection.coefficient, convective_area);

    let t_junction = inputs.ambient + resistances.temperature_rise(inputs.heat_load);

    trace!(
        "heat sink solved: r_total={:.4} C/W, r_hs={:.4} C/W",
        resistances.total.value,
        resistances.heat_sink.value,
    );

    Ok(Results {
        die_area,
        fin_spacing,
        reynolds: convection.reynolds,
        nusselt: convection.nusselt,
        h: convection.coefficient,
        convective_area,
        resistances,
        t_junction,
        regime: convection.regime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, Power, Velocity},
        length::meter,
        power::watt,
        ratio::ratio,
        velocity::meter_per_second,
    };

    use crate::support::units::{Celsius, from_si};

    #[test]
    fn reference_design() {
        let results = solve(&Inputs::default()).unwrap();

        assert_eq!(results.regime, FlowRegime::Laminar);
        assert_relative_eq!(results.resistances.total.value, 0.373, epsilon = 0.02);
        assert_relative_eq!(
            results.t_junction.value(),
            80.96,
            epsilon = 1.0
        );

        // Tighter agreement with the published spreadsheet values.
        assert_relative_eq!(
            results.resistances.total.value,
            0.373_109_832_122_131,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            results.t_junction.value(),
            80.966_474_818_319_65,
            max_relative = 1e-9
        );
    }

    #[test]
    fn deterministic() {
        let inputs = Inputs::default();
        let first = solve(&inputs).unwrap();
        let second = solve(&inputs).unwrap();

        assert_eq!(
            first.t_junction.value().to_bits(),
            second.t_junction.value().to_bits()
        );
        assert_eq!(
            first.resistances.total.value.to_bits(),
            second.resistances.total.value.to_bits()
        );
        assert_eq!(first, second);
    }

    #[test]
    fn junction_temperature_is_ambient_plus_rise_in_celsius() {
        let mut inputs = Inputs::default();
        inputs.ambient = Celsius::new(20.1);

        let results = solve(&inputs).unwrap();
        assert_eq!(
            results.t_junction.value(),
            20.1 + 150.0 * results.resistances.total.value
        );
    }

    #[test]
    fn summation_identity() {
        for velocity in [0.5, 1.0, 3.0, 20.0, 80.0] {
            let mut inputs = Inputs::default();
            inputs.air.velocity = Velocity::new::<meter_per_second>(velocity);

            let r = solve(&inputs).unwrap().resistances;
            let sum = r.junction_case.value + r.tim.value + r.conduction.value + r.convection.value;
            assert_relative_eq!(r.total.value, sum, max_relative = 1e-14);
        }
    }

    #[test]
    fn junction_temperature_increases_with_load() {
        let mut previous = f64::NEG_INFINITY;
        for q in [0.0, 50.0, 150.0, 150.5, 400.0] {
            let mut inputs = Inputs::default();
            inputs.heat_load = Power::new::<watt>(q);

            let t = solve(&inputs).unwrap().t_junction.value();
            assert!(t > previous, "T_j should rise with load: {t} <= {previous}");
            previous = t;
        }
    }

    #[test]
    fn junction_case_resistance_raises_total_and_temperature() {
        let base = solve(&Inputs::default()).unwrap();

        let mut inputs = Inputs::default();
        inputs.materials.junction_to_case = from_si(0.25);
        let raised = solve(&inputs).unwrap();

        assert!(raised.resistances.total > base.resistances.total);
        assert!(raised.t_junction > base.t_junction);
        assert_relative_eq!(
            raised.resistances.total.value - base.resistances.total.value,
            0.05,
            epsilon = 1e-12
        );
    }

    #[test]
    fn two_fins_is_turbulent_and_solvable() {
        let mut inputs = Inputs::default();
        inputs.sink.n_fins = 2;

        let results = solve(&inputs).unwrap();

        assert_eq!(results.regime, FlowRegime::Turbulent);
        assert!(results.fin_spacing.value > 0.0);
        assert_relative_eq!(
            results.reynolds.get::<ratio>(),
            7_286.624_203_821_657,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            results.resistances.total.value,
            17.974_017_206_509_306,
            max_relative = 1e-9
        );
    }

    #[test]
    fn too_few_fins_is_a_geometry_error() {
        for n_fins in [0, 1] {
            let mut inputs = Inputs::default();
            inputs.sink.n_fins = n_fins;

            assert_eq!(solve(&inputs), Err(GeometryError::TooFewFins { n_fins }));
        }
    }

    #[test]
    fn degenerate_inputs_are_not_rejected() {
        let mut inputs = Inputs::default();
        inputs.tim.thickness = Length::new::<meter>(0.0);

        let results = solve(&inputs).unwrap();
        assert_relative_eq!(results.resistances.tim.value, 0.0);
    }
}
