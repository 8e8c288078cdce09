use super::SettingsError;
use thiserror::Error;

/// Which side of the problem a quantity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Supply,
    Demand,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Supply => write!(f, "supply"),
            Side::Demand => write!(f, "demand"),
        }
    }
}

/// Error type returned when a transportation problem is rejected.
///
/// All checks run before any allocation strategy is started, so a
/// rejected problem never produces a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    /// Supply / demand lengths disagree with the cost matrix
    #[error("{what} has dimension {found}, expected {expected}")]
    InvalidDimension {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// No sources or no destinations
    #[error("Problem has no sources or no destinations")]
    EmptyProblem,
    /// A supply or demand entry is below zero
    #[error("Negative {side} quantity at index {index}")]
    NegativeQuantity { side: Side, index: usize },
    /// A unit cost is below zero
    #[error("Negative cost at ({row}, {col})")]
    NegativeCost { row: usize, col: usize },
    /// A NaN or infinite value in supply, demand or costs
    #[error("Problem data contains NaN or infinite values")]
    NonFinite,
    /// Total supply or total demand is zero, so there is nothing to allocate
    #[error("Total {0} is zero, the method is not applicable")]
    ZeroTotal(Side),
    /// Total supply and total demand differ
    #[error("The problem is not balanced (supply {supply}, demand {demand})")]
    Unbalanced { supply: f64, demand: f64 },
    /// Settings failed validation
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),
}
