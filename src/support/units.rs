//! Quantities used by the heat-sink model that [`uom`] does not name.
//!
//! Model inputs and results carry [`uom`] quantities. Where [`uom`] has no
//! named quantity for a dimension (thermal resistance, kinematic viscosity,
//! convective coefficient), this module defines an alias with the right
//! dimension, and [`from_si`] builds a value from its SI magnitude:
//!
//! ```
//! use twine_heatsink::support::units::{ThermalResistance, from_si};
//!
//! let r_jc: ThermalResistance = from_si(0.2);
//! assert_eq!(r_jc.value, 0.2);
//! ```
//!
//! The SI magnitude is always available through the quantity's `value` field.
//! Because a kelvin interval equals a degree Celsius interval, a thermal
//! resistance in K/W reads directly as °C/W.
//!
//! Temperatures that callers supply or read in °C are held as [`Celsius`].

mod celsius;
mod quantities;

use std::marker::PhantomData;

use uom::si::{Dimension, Quantity, SI};

pub use celsius::Celsius;
pub use quantities::{HeatTransferCoefficient, KinematicViscosity, ThermalResistance};

/// Builds a quantity from its magnitude in base SI units.
#[must_use]
pub fn from_si<D>(value: f64) -> Quantity<D, SI<f64>, f64>
where
    D: Dimension + ?Sized,
{
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}
