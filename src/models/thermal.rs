//! Thermal systems models.

pub mod heat_sink;
