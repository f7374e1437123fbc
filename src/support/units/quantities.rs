use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, P2, P3, Z0},
};

/// Thermal resistance, K/W in SI.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Kinematic viscosity, m²/s in SI.
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Convective heat transfer coefficient, W/m²·K in SI.
pub type HeatTransferCoefficient = Quantity<ISQ<Z0, P1, N3, Z0, N1, Z0, Z0>, SI<f64>, f64>;
