//! Series resistance network from junction to ambient air.

use uom::si::{
    f64::{Area, Length, Power, TemperatureInterval, ThermalConductivity},
    area::square_meter,
    length::meter,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::units::{HeatTransferCoefficient, ThermalResistance, from_si};

use super::Inputs;

/// Thermal resistances along the heat path, each in K/W (equivalently °C/W).
///
/// Every term is in series, so `total` is the sum of
/// `junction_case`, `tim`, `conduction`, and `convection`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistances {
    /// Junction to case, taken directly from the inputs.
    pub junction_case: ThermalResistance,

    /// Across the thermal interface material.
    pub tim: ThermalResistance,

    /// Through the sink base, over the die footprint.
    pub conduction: ThermalResistance,

    /// From the wetted sink surface to the air.
    pub convection: ThermalResistance,

    /// Sink contribution, `conduction + convection`.
    pub heat_sink: ThermalResistance,

    /// Junction to ambient.
    pub total: ThermalResistance,
}

impl Resistances {
    pub(super) fn evaluate(
        inputs: &Inputs,
        die_area: Area,
        coefficient: HeatTransferCoefficient,
        convective_area: Area,
    ) -> Self {
        let junction_case = inputs.materials.junction_to_case;
        let tim = slab(inputs.tim.thickness, inputs.tim.conductivity, die_area);
        let conduction = slab(
            inputs.sink.base_thickness,
            inputs.materials.base_conductivity,
            die_area,
        );
        let convection: ThermalResistance =
            from_si(1.0 / (coefficient.value * convective_area.get::<square_meter>()));

        let heat_sink = conduction + convection;
        let total = junction_case + tim + heat_sink;

        Self {
            junction_case,
            tim,
            conduction,
            convection,
            heat_sink,
            total,
        }
    }

    /// Junction temperature rise above ambient for a given heat load.
    #[must_use]
    pub fn temperature_rise(&self, heat_load: Power) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(heat_load.get::<watt>() * self.total.value)
    }
}

/// One-dimensional conduction resistance of a slab, `t / (k·A)`.
fn slab(thickness: Length, conductivity: ThermalConductivity, area: Area) -> ThermalResistance {
    from_si(
        thickness.get::<meter>()
            / (conductivity.get::<watt_per_meter_kelvin>() * area.get::<square_meter>()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn reference() -> Resistances {
        let area = Area::new::<square_meter>(0.002_362_5);
        let h = from_si(23.278_089_503_132_986);
        let a_total = Area::new::<square_meter>(0.27504);
        Resistances::evaluate(&Inputs::default(), area, h, a_total)
    }

    #[test]
    fn reference_terms() {
        let r = reference();

        assert_relative_eq!(r.junction_case.value, 0.2);
        assert_relative_eq!(r.tim.value, 0.010_582_010_582_010_583, max_relative = 1e-12);
        assert_relative_eq!(r.conduction.value, 0.006_336_533_282_641_068, max_relative = 1e-12);
        assert_relative_eq!(r.convection.value, 0.156_191_288_257_479_33, max_relative = 1e-12);
        assert_relative_eq!(r.heat_sink.value, 0.162_527_821_540_120_38, max_relative = 1e-12);
        assert_relative_eq!(r.total.value, 0.373_109_832_122_131, max_relative = 1e-12);
    }

    #[test]
    fn terms_sum_to_total() {
        let r = reference();

        let sum = r.junction_case.value + r.tim.value + r.conduction.value + r.convection.value;
        assert_relative_eq!(r.total.value, sum, epsilon = 1e-15);
        assert_relative_eq!(
            r.heat_sink.value,
            r.conduction.value + r.convection.value,
            epsilon = 1e-15
        );
    }

    #[test]
    fn temperature_rise_scales_with_load() {
        let r = reference();

        let rise = r.temperature_rise(Power::new::<watt>(150.0));
        assert_relative_eq!(
            rise.get::<delta_kelvin>(),
            150.0 * 0.373_109_832_122_131,
            max_relative = 1e-12
        );

        let zero = r.temperature_rise(Power::new::<watt>(0.0));
        assert_relative_eq!(zero.get::<delta_kelvin>(), 0.0);
    }
}
