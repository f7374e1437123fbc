//! Supporting utilities used by models.
//!
//! These APIs are public because they appear in model inputs and results,
//! but they are not stable.

pub mod constraint;
pub mod units;
