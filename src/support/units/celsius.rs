use std::{fmt, ops::Add};

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// A temperature held as its magnitude in degrees Celsius.
///
/// [`ThermodynamicTemperature`] stores kelvin, so a Celsius value read back
/// from it can differ in the last bits from the one it was built with.
/// `Celsius` returns exactly the number it was given:
///
/// ```
/// use twine_heatsink::support::units::Celsius;
///
/// assert_eq!(Celsius::new(20.1).value(), 20.1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Celsius(f64);

impl Celsius {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Magnitude in °C.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Converts to a [`ThermodynamicTemperature`].
    #[must_use]
    pub fn to_thermodynamic(self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(self.0)
    }
}

impl From<Celsius> for ThermodynamicTemperature {
    fn from(celsius: Celsius) -> Self {
        celsius.to_thermodynamic()
    }
}

impl Add<TemperatureInterval> for Celsius {
    type Output = Self;

    fn add(self, rise: TemperatureInterval) -> Self {
        Self(self.0 + rise.get::<delta_kelvin>())
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        f.write_str(" °C")
    }
}
