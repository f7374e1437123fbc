//! # Twine Heat Sink
//!
//! Steady-state junction temperature of a processor cooled by a finned,
//! forced-air heat sink, built as a model for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Heat flows from the die through a series resistance network:
//! junction → case → thermal interface material → heat-sink base → air.
//!
//! ```
//! use twine_heatsink::models::thermal::heat_sink::{FlowRegime, Inputs, solve};
//!
//! let results = solve(&Inputs::default()).unwrap();
//!
//! assert_eq!(results.regime, FlowRegime::Laminar);
//! assert!((results.resistances.total.value - 0.373).abs() < 0.02);
//! assert!((results.t_junction.value() - 80.96).abs() < 1.0);
//! ```
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.

pub mod models;
pub mod support;
