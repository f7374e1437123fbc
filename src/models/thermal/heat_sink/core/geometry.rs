//! Areas and spacings derived from the die and sink dimensions.

use uom::si::f64::{Area, Length};

use super::{Die, GeometryError, Sink};

/// Footprint area of the die, through which heat enters the TIM and base.
pub(super) fn die_area(die: &Die) -> Area {
    die.length * die.width
}

/// Clear gap between adjacent fins.
///
/// The fins are spread evenly across the sink width, leaving `n_fins - 1`
/// channels.
///
/// # Errors
///
/// Returns [`GeometryError::TooFewFins`] if `n_fins < 2`.
pub fn fin_spacing(
    sink_width: Length,
    n_fins: u32,
    fin_thickness: Length,
) -> Result<Length, GeometryError> {
    if n_fins < 2 {
        return Err(GeometryError::TooFewFins { n_fins });
    }

    let n = f64::from(n_fins);
    Ok((sink_width - fin_thickness * n) / (n - 1.0))
}

/// Total area wetted by the cooling air.
///
/// Sums both sides of every fin, the fin tops, and the base exposed between
/// fins. Fin efficiency and tip corrections are not applied.
pub(super) fn convective_area(sink: &Sink) -> Area {
    let n = f64::from(sink.n_fins);

    let fin_sides = sink.fin_height * sink.length * (2.0 * n);
    let fin_tops = sink.fin_thickness * sink.length * n;
    let exposed_base = (sink.width - sink.fin_thickness * n) * sink.length;

    fin_sides + fin_tops + exposed_base
}
