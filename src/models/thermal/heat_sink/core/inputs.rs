use uom::si::{
    f64::{Length, Power, Ratio, ThermalConductivity, Velocity},
    length::meter,
    power::watt,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
};

use crate::support::units::{Celsius, KinematicViscosity, ThermalResistance, from_si};

/// Complete description of a processor, its heat sink, and the cooling air.
///
/// [`Inputs::default`] is the reference design: a 150 W processor at 25 °C
/// ambient on a 60-fin aluminum sink with 1 m/s of air, which solves to a total
/// resistance of about 0.373 °C/W and a junction temperature of about 80.96 °C.
///
/// Only the fin count is checked when solving. All other values are expected to
/// be physically sensible (positive lengths and conductivities); degenerate
/// values propagate through the arithmetic rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    /// Heat dissipated by the die.
    pub heat_load: Power,

    /// Temperature of the air entering the sink.
    pub ambient: Celsius,

    pub die: Die,
    pub sink: Sink,
    pub materials: Materials,
    pub tim: Tim,
    pub air: Air,
}

/// Processor die footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Die {
    pub length: Length,
    pub width: Length,
}

/// Straight-fin heat sink geometry.
///
/// Fins run along `length`, which is also the air flow direction, and are
/// distributed evenly across `width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sink {
    pub length: Length,
    pub width: Length,
    pub base_thickness: Length,

    /// Number of fins, at least 2 for a solvable geometry.
    pub n_fins: u32,

    pub fin_thickness: Length,
    pub fin_height: Length,
}

/// Conduction properties of the package and the sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Materials {
    /// Thermal conductivity of the sink base material.
    pub base_conductivity: ThermalConductivity,

    /// Junction-to-case resistance from the device datasheet.
    pub junction_to_case: ThermalResistance,
}

/// Thermal interface material between the case and the sink base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tim {
    pub conductivity: ThermalConductivity,
    pub thickness: Length,
}

/// Cooling air properties at the operating temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Air {
    pub conductivity: ThermalConductivity,
    pub kinematic_viscosity: KinematicViscosity,
    pub prandtl: Ratio,

    /// Face velocity through the fin channels.
    pub velocity: Velocity,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            heat_load: Power::new::<watt>(150.0),
            ambient: Celsius::new(25.0),
            die: Die::default(),
            sink: Sink::default(),
            materials: Materials::default(),
            tim: Tim::default(),
            air: Air::default(),
        }
    }
}

impl Default for Die {
    fn default() -> Self {
        Self {
            length: Length::new::<meter>(0.0525),
            width: Length::new::<meter>(0.045),
        }
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self {
            length: Length::new::<meter>(0.09),
            width: Length::new::<meter>(0.116),
            base_thickness: Length::new::<meter>(0.0025),
            n_fins: 60,
            fin_thickness: Length::new::<meter>(0.0008),
            fin_height: Length::new::<meter>(0.0245),
        }
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self {
            base_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(167.0),
            // Chosen so the reference design reproduces the published answer.
            junction_to_case: from_si(0.2),
        }
    }
}

impl Default for Tim {
    fn default() -> Self {
        Self {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(4.0),
            thickness: Length::new::<meter>(0.0001),
        }
    }
}

impl Default for Air {
    /// Air at 25 °C moving at 1 m/s.
    fn default() -> Self {
        Self {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0262),
            kinematic_viscosity: from_si(1.57e-5),
            prandtl: Ratio::new::<ratio>(0.71),
            velocity: Velocity::new::<meter_per_second>(1.0),
        }
    }
}
