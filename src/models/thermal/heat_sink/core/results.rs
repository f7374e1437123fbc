use uom::si::f64::{Area, Length, Ratio};

use crate::support::units::{Celsius, HeatTransferCoefficient};

use super::{FlowRegime, Resistances};

/// Everything derived while solving a heat sink, from geometry to junction
/// temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Results {
    /// Die footprint area.
    pub die_area: Area,

    /// Clear gap between adjacent fins.
    pub fin_spacing: Length,

    /// Channel Reynolds number, based on the fin spacing.
    pub reynolds: Ratio,

    /// Channel Nusselt number, based on twice the fin spacing.
    pub nusselt: Ratio,

    /// Convective heat transfer coefficient.
    pub h: HeatTransferCoefficient,

    /// Total area wetted by the air.
    pub convective_area: Area,

    pub resistances: Resistances,

    /// Steady-state junction temperature.
    pub t_junction: Celsius,

    /// Flow regime, which identifies the Nusselt correlation used.
    pub regime: FlowRegime,
}
