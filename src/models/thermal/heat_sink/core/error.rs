use thiserror::Error;

/// Errors that make a heat-sink geometry unsolvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Fewer than two fins leaves no channel for the air to flow through.
    #[error("invalid geometry: n_fins must be >= 2, got {n_fins}")]
    TooFewFins {
        /// Fin count that was supplied.
        n_fins: u32,
    },
}
