//! Cross-checks against independently computed reference values.
//!
//! A [`Reference`] holds values produced outside this crate, typically cached
//! cells read from a design spreadsheet. [`compare`] checks each one against a
//! solved [`Results`] and reports every quantity with its absolute difference.
//! A difference beyond tolerance is a finding in the [`Report`], not an error;
//! the caller decides how severe it is.
//!
//! ```
//! use twine_heatsink::models::thermal::heat_sink::{
//!     Inputs, Reference, Tolerances, compare, solve,
//! };
//!
//! let results = solve(&Inputs::default()).unwrap();
//! let report = compare(&results, &Reference::published(), Tolerances::default());
//! assert!(report.passed());
//! ```

use log::warn;
use serde_json::{Map, Value};
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative},
    units::{Celsius, ThermalResistance, from_si},
};

use super::{
    Results,
    params::{ParamError, reject_unknown, sorted_names},
};

/// A solved quantity that can be checked against a reference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TotalResistance,
    JunctionTemperature,
    ConvectionResistance,
    ConductionResistance,
    TimResistance,
}

impl Metric {
    /// All metrics, in reporting order.
    pub const ALL: [Metric; 5] = [
        Metric::TotalResistance,
        Metric::JunctionTemperature,
        Metric::ConvectionResistance,
        Metric::ConductionResistance,
        Metric::TimResistance,
    ];

    /// Result field name of this metric.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::TotalResistance => "r_total_c_w",
            Self::JunctionTemperature => "t_junction_c",
            Self::ConvectionResistance => "r_conv_c_w",
            Self::ConductionResistance => "r_cond_c_w",
            Self::TimResistance => "r_tim_c_w",
        }
    }

    /// Solved value, in °C/W for resistances and °C for temperature.
    fn computed(self, results: &Results) -> f64 {
        let r = &results.resistances;
        match self {
            Self::TotalResistance => r.total.value,
            Self::JunctionTemperature => results.t_junction.value(),
            Self::ConvectionResistance => r.convection.value,
            Self::ConductionResistance => r.conduction.value,
            Self::TimResistance => r.tim.value,
        }
    }
}

/// Reference values to check a solution against.
///
/// Quantities left as `None` are not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reference {
    pub r_total: Option<ThermalResistance>,
    pub t_junction: Option<Celsius>,
    pub r_conv: Option<ThermalResistance>,
    pub r_cond: Option<ThermalResistance>,
    pub r_tim: Option<ThermalResistance>,
}

impl Reference {
    /// The published answer for the reference design:
    /// 0.373 °C/W total resistance and an 80.96 °C junction.
    #[must_use]
    pub fn published() -> Self {
        Self {
            r_total: Some(from_si(0.373)),
            t_junction: Some(Celsius::new(80.96)),
            ..Self::default()
        }
    }

    /// Builds a reference from a flat map keyed by [`Metric::key`].
    ///
    /// Absent keys are left unchecked.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::UnknownFields`] for keys that are not metrics, or
    /// [`ParamError::InvalidValue`] for values that are not numbers.
    pub fn from_params(params: &Map<String, Value>) -> Result<Self, ParamError> {
        reject_unknown(params, sorted_names(Metric::ALL.map(Metric::key)))?;

        let mut reference = Self::default();
        for metric in Metric::ALL {
            let Some(value) = params.get(metric.key()) else {
                continue;
            };
            let number = value.as_f64().ok_or_else(|| ParamError::InvalidValue {
                field: metric.key(),
                expected: "a number",
                found: value.to_string(),
            })?;
            reference.set(metric, number);
        }
        Ok(reference)
    }

    fn set(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::TotalResistance => self.r_total = Some(from_si(value)),
            Metric::JunctionTemperature => self.t_junction = Some(Celsius::new(value)),
            Metric::ConvectionResistance => self.r_conv = Some(from_si(value)),
            Metric::ConductionResistance => self.r_cond = Some(from_si(value)),
            Metric::TimResistance => self.r_tim = Some(from_si(value)),
        }
    }

    /// Reference value for a metric, in °C/W or °C.
    fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::TotalResistance => self.r_total.map(|r| r.value),
            Metric::JunctionTemperature => self.t_junction.map(Celsius::value),
            Metric::ConvectionResistance => self.r_conv.map(|r| r.value),
            Metric::ConductionResistance => self.r_cond.map(|r| r.value),
            Metric::TimResistance => self.r_tim.map(|r| r.value),
        }
    }
}

/// Absolute tolerances for [`compare`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    resistance: ThermalResistance,
    temperature: TemperatureInterval,
}

impl Default for Tolerances {
    /// 0.02 °C/W for resistances and 1 °C for temperature.
    fn default() -> Self {
        Self {
            resistance: from_si(0.02),
            temperature: TemperatureInterval::new::<delta_kelvin>(1.0),
        }
    }
}

impl Tolerances {
    /// Constructs validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or not a number.
    pub fn new(
        resistance: ThermalResistance,
        temperature: TemperatureInterval,
    ) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            NonNegative::new(resistance)?,
            NonNegative::new(temperature)?,
        ))
    }

    /// Constructs tolerances from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        resistance: Constrained<ThermalResistance, NonNegative>,
        temperature: Constrained<TemperatureInterval, NonNegative>,
    ) -> Self {
        Self {
            resistance: resistance.into_inner(),
            temperature: temperature.into_inner(),
        }
    }

    #[must_use]
    pub fn resistance(&self) -> ThermalResistance {
        self.resistance
    }

    #[must_use]
    pub fn temperature(&self) -> TemperatureInterval {
        self.temperature
    }

    fn for_metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::JunctionTemperature => self.temperature.get::<delta_kelvin>(),
            _ => self.resistance.value,
        }
    }
}

/// Outcome of checking one metric.
///
/// Values are in °C/W for resistances and °C for temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Check {
    pub metric: Metric,
    pub computed: f64,
    pub reference: f64,
    pub abs_diff: f64,
    pub tolerance: f64,
    pub passed: bool,
}

/// Per-metric outcomes of a [`compare`], in [`Metric::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    checks: Vec<Check>,
}

impl Report {
    /// Whether every checked metric is within tolerance.
    ///
    /// A report with no checks passes.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Checks that exceeded their tolerance.
    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|check| !check.passed)
    }

    /// Outcome for one metric, if it was checked.
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<&Check> {
        self.checks.iter().find(|check| check.metric == metric)
    }
}

/// Compares solved results against reference values.
#[must_use]
pub fn compare(results: &Results, reference: &Reference, tolerances: Tolerances) -> Report {
    let checks = Metric::ALL
        .into_iter()
        .filter_map(|metric| {
            let reference = reference.get(metric)?;
            let computed = metric.computed(results);
            let tolerance = tolerances.for_metric(metric);
            let abs_diff = (computed - reference).abs();

            // NaN differences fail.
            let passed = abs_diff <= tolerance;
            if !passed {
                warn!(
                    "{} outside tolerance: computed={computed} reference={reference} \
                     diff={abs_diff} tol={tolerance}",
                    metric.key(),
                );
            }

            Some(Check {
                metric,
                computed,
                reference,
                abs_diff,
                tolerance,
                passed,
            })
        })
        .collect();

    Report { checks }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use serde_json::json;
    use uom::si::{f64::Velocity, velocity::meter_per_second};

    use crate::models::thermal::heat_sink::{Inputs, solve};

    fn reference_results() -> Results {
        solve(&Inputs::default()).unwrap()
    }

    fn params(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("test params must be an object, got {other}"),
        }
    }

    #[test]
    fn published_reference_passes() {
        let report = compare(
            &reference_results(),
            &Reference::published(),
            Tolerances::default(),
        );

        assert!(report.passed());
        assert_eq!(report.checks().len(), 2);

        let total = report.get(Metric::TotalResistance).unwrap();
        assert_relative_eq!(total.reference, 0.373);
        assert_relative_eq!(total.abs_diff, 0.000_109_832_122_131, epsilon = 1e-9);
        assert_relative_eq!(total.tolerance, 0.02);

        let temp = report.get(Metric::JunctionTemperature).unwrap();
        assert_relative_eq!(temp.abs_diff, 0.006_474_818_319_65, epsilon = 1e-9);
        assert_relative_eq!(temp.tolerance, 1.0);
    }

    #[test]
    fn mismatch_is_reported_not_raised() {
        let reference = Reference {
            r_conv: Some(from_si(0.12)),
            r_tim: Some(from_si(0.0106)),
            ..Reference::default()
        };

        let report = compare(&reference_results(), &reference, Tolerances::default());

        assert!(!report.passed());
        let failures: Vec<_> = report.failures().map(|check| check.metric).collect();
        assert_eq!(failures, [Metric::ConvectionResistance]);

        let conv = report.get(Metric::ConvectionResistance).unwrap();
        assert_relative_eq!(conv.computed, 0.156_191_288_257_479_33, max_relative = 1e-9);
        assert_relative_eq!(conv.abs_diff, 0.036_191_288_257_479_33, max_relative = 1e-9);
        assert!(report.get(Metric::TimResistance).unwrap().passed);
    }

    #[test]
    fn tighter_tolerance_turns_pass_into_fail() {
        let tolerances =
            Tolerances::new(from_si(1e-5), TemperatureInterval::new::<delta_kelvin>(1e-3)).unwrap();

        let report = compare(&reference_results(), &Reference::published(), tolerances);

        assert!(!report.passed());
        assert_eq!(report.failures().count(), 2);
    }

    #[test]
    fn empty_reference_checks_nothing() {
        let report = compare(
            &reference_results(),
            &Reference::default(),
            Tolerances::default(),
        );
        assert!(report.checks().is_empty());
        assert!(report.passed());
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        let temperature = TemperatureInterval::new::<delta_kelvin>(1.0);
        assert!(Tolerances::new(from_si(-0.02), temperature).is_err());
        assert!(Tolerances::new(from_si(f64::NAN), temperature).is_err());
    }

    #[test]
    fn nan_results_fail() {
        let mut inputs = Inputs::default();
        inputs.air.velocity = Velocity::new::<meter_per_second>(f64::NAN);
        let results = solve(&inputs).unwrap();

        let report = compare(&results, &Reference::published(), Tolerances::default());
        assert!(!report.passed());
    }

    #[test]
    fn reference_from_spreadsheet_cells() {
        let reference = Reference::from_params(&params(json!({
            "r_total_c_w": 0.3731,
            "t_junction_c": 80.97,
            "r_cond_c_w": 0.0063,
        })))
        .unwrap();

        assert!(reference.r_total.is_some());
        assert!(reference.r_conv.is_none());
        assert_eq!(reference.t_junction, Some(Celsius::new(80.97)));

        let report = compare(&reference_results(), &reference, Tolerances::default());
        assert_eq!(report.checks().len(), 3);
        assert!(report.passed());
    }

    #[test]
    fn reference_cells_are_reported_unchanged() {
        for t_junction in [80.97, 35.7, 20.1, 0.3] {
            let reference =
                Reference::from_params(&params(json!({ "t_junction_c": t_junction }))).unwrap();
            let report = compare(&reference_results(), &reference, Tolerances::default());

            let check = report.get(Metric::JunctionTemperature).unwrap();
            assert_eq!(check.reference, t_junction);
            assert_eq!(check.computed, reference_results().t_junction.value());
        }
    }

    #[test]
    fn reference_rejects_unknown_and_non_numeric_cells() {
        let err = Reference::from_params(&params(json!({ "r_hs_c_w": 0.16 }))).unwrap_err();
        let ParamError::UnknownFields { unknown, allowed } = err else {
            panic!("expected unknown fields, got {err:?}");
        };
        assert_eq!(unknown, ["r_hs_c_w"]);
        assert_eq!(
            allowed,
            ["r_cond_c_w", "r_conv_c_w", "r_tim_c_w", "r_total_c_w", "t_junction_c"]
        );

        let err = Reference::from_params(&params(json!({ "r_tim_c_w": null }))).unwrap_err();
        assert!(matches!(
            err,
            ParamError::InvalidValue {
                field: "r_tim_c_w",
                ..
            }
        ));
    }
}
