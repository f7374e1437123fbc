//! Forced convection in the channels between fins.
//!
//! Each channel is treated as a duct with a hydraulic diameter of twice the
//! fin spacing. The Reynolds number selects between a developing laminar flow
//! correlation and the Dittus-Boelter turbulent correlation.

use std::fmt;

use log::trace;
use uom::si::{
    f64::{Length, Ratio},
    length::meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
};

use crate::support::units::{HeatTransferCoefficient, from_si};

use super::Air;

/// Reynolds number at which flow is taken to become turbulent.
///
/// The threshold itself belongs to the turbulent regime.
pub const TRANSITION_REYNOLDS: f64 = 2300.0;

/// Flow regime in the fin channels, identifying the Nusselt correlation used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    /// `Re < 2300`: developing laminar flow.
    Laminar,
    /// `Re >= 2300`: fully turbulent flow.
    Turbulent,
}

impl FlowRegime {
    /// Classifies the flow for a Reynolds number.
    #[must_use]
    pub fn from_reynolds(re: Ratio) -> Self {
        if re.get::<ratio>() < TRANSITION_REYNOLDS {
            Self::Laminar
        } else {
            Self::Turbulent
        }
    }

    /// Lowercase name of the regime, as used in flat result maps.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Laminar => "laminar",
            Self::Turbulent => "turbulent",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convective heat transfer between the fins and the air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convection {
    pub reynolds: Ratio,
    pub nusselt: Ratio,
    pub regime: FlowRegime,
    pub coefficient: HeatTransferCoefficient,
}

impl Convection {
    /// Evaluates channel convection for a fin spacing and flow length.
    pub(super) fn evaluate(air: &Air, fin_spacing: Length, flow_length: Length) -> Self {
        let reynolds = Ratio::new::<ratio>(
            air.velocity.get::<meter_per_second>() * fin_spacing.get::<meter>()
                / air.kinematic_viscosity.value,
        );

        let (nusselt, regime) = nusselt(reynolds, air.prandtl, fin_spacing, flow_length);

        let hydraulic_diameter = 2.0 * fin_spacing.get::<meter>();
        let coefficient = from_si(
            nusselt.get::<ratio>() * air.conductivity.get::<watt_per_meter_kelvin>()
                / hydraulic_diameter,
        );

        trace!(
            "channel convection: re={:.1} nu={:.3} regime={regime}",
            reynolds.get::<ratio>(),
            nusselt.get::<ratio>(),
        );

        Self {
            reynolds,
            nusselt,
            regime,
            coefficient,
        }
    }
}

/// Nusselt number for flow between fins, with the regime that produced it.
///
/// - Laminar: `1.86 · (Re · Pr · 2s / L)^(1/3)`
/// - Turbulent: `0.023 · Re^0.8 · Pr^0.3`
///
/// where `s` is the fin spacing and `L` the flow length.
#[must_use]
pub fn nusselt(
    reynolds: Ratio,
    prandtl: Ratio,
    fin_spacing: Length,
    flow_length: Length,
) -> (Ratio, FlowRegime) {
    let re = reynolds.get::<ratio>();
    let pr = prandtl.get::<ratio>();

    let regime = FlowRegime::from_reynolds(reynolds);
    let nu = match regime {
        FlowRegime::Laminar => {
            let graetz = re * pr * (2.0 * fin_spacing.get::<meter>() / flow_length.get::<meter>());
            1.86 * graetz.cbrt()
        }
        FlowRegime::Turbulent => 0.023 * re.powf(0.8) * pr.powf(0.3),
    };

    (Ratio::new::<ratio>(nu), regime)
}
