//! Finned heat-sink junction temperature model.
//!
//! [`HeatSinkModel`] is the [`twine_core::Model`] for this module; it delegates
//! to [`solve`], which can also be called directly. The computational core is
//! in the internal `core` module.
//!
//! # Failure policy
//!
//! The only checked precondition is a fin count of at least two, reported as
//! [`GeometryError::TooFewFins`]. Other degenerate inputs, such as a zero
//! conductivity or a negative length, are not rejected and propagate through
//! the arithmetic as infinities, NaNs, or nonsensical values.
//!
//! # Other callers
//!
//! - [`Inputs::from_params`] and [`solve_params`] accept flat JSON parameters
//!   against a fixed schema, [`INPUT_FIELDS`].
//! - [`compare`] cross-checks results against reference values.

mod core;
mod params;
mod validation;

pub use self::core::{
    Air, Convection, Die, FlowRegime, GeometryError, Inputs, Materials, Resistances, Results, Sink,
    TRANSITION_REYNOLDS, Tim, fin_spacing, nusselt, solve,
};
pub use params::{
    Field, FieldKind, INPUT_FIELDS, ParamError, SolveParamsError, allowed_input_fields,
    solve_params,
};
pub use validation::{Check, Metric, Reference, Report, Tolerances, compare};

use twine_core::Model;

/// Twine model of a processor on a finned heat sink.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_heatsink::models::thermal::heat_sink::{HeatSinkModel, Inputs};
///
/// let results = HeatSinkModel.call(&Inputs::default()).unwrap();
/// assert!(results.resistances.total.value > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeatSinkModel;

impl Model for HeatSinkModel {
    type Input = Inputs;
    type Output = Results;
    type Error = GeometryError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Power, power::watt};

    #[test]
    fn model_matches_direct_solve() {
        let mut inputs = Inputs::default();
        inputs.heat_load = Power::new::<watt>(95.0);

        let via_model = HeatSinkModel.call(&inputs).unwrap();
        assert_eq!(via_model, solve(&inputs).unwrap());
    }

    #[test]
    fn model_reports_geometry_errors() {
        let mut inputs = Inputs::default();
        inputs.sink.n_fins = 1;

        assert_eq!(
            HeatSinkModel.call(&inputs),
            Err(GeometryError::TooFewFins { n_fins: 1 })
        );
    }

    #[test]
    fn independent_callers_across_threads() {
        let handles: Vec<_> = (2..10)
            .map(|n_fins| {
                std::thread::spawn(move || {
                    let mut inputs = Inputs::default();
                    inputs.sink.n_fins = n_fins * 6;
                    (inputs, HeatSinkModel.call(&inputs))
                })
            })
            .collect();

        for handle in handles {
            let (inputs, result) = handle.join().unwrap();
            assert_eq!(result, solve(&inputs));
        }
    }
}
