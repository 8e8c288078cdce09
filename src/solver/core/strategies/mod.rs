//! Cell selection rules for building an initial basic feasible solution.
//!
//! Each strategy only decides which cell receives the next allocation.
//! The allocation itself is always performed by
//! [`TransportState::allocate`](crate::solver::TransportState::allocate).

use super::{SettingsError, TransportState};
use crate::algebra::*;
use enum_dispatch::*;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod northwest;
mod russel;
mod vogel;
pub use northwest::*;
pub use russel::*;
pub use vogel::*;

/// Available allocation methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StrategyKind {
    /// North-West Corner rule
    NorthWest,
    /// Vogel's Approximation Method
    Vogel,
    /// Russel's Approximation Method
    Russel,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            StrategyKind::NorthWest => "North-West Corner",
            StrategyKind::Vogel => "Vogel's Approximation",
            StrategyKind::Russel => "Russel's Approximation",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "northwest" | "north-west" => Ok(StrategyKind::NorthWest),
            "vogel" => Ok(StrategyKind::Vogel),
            "russel" => Ok(StrategyKind::Russel),
            _ => Err(format!("unknown allocation strategy \"{}\"", s)),
        }
    }
}

/// Penalty given to a line with a single live cell in Vogel's method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingletonPenalty {
    /// the line has no alternative, so its penalty is zero
    Zero,
    /// the penalty is the cost of the lone live cell
    Cost,
}

impl FromStr for SingletonPenalty {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(SingletonPenalty::Zero),
            "cost" => Ok(SingletonPenalty::Cost),
            _ => Err(SettingsError::BadFieldValue("vogel_singleton_penalty")),
        }
    }
}

#[enum_dispatch]
pub trait AllocationStrategy<T>
where
    T: FloatT,
{
    /// the method this strategy implements
    fn kind(&self) -> StrategyKind;

    /// next cell to allocate, or `None` once the method has finished
    fn select_cell(&mut self, state: &TransportState<T>) -> Option<(usize, usize)>;
}

#[allow(clippy::enum_variant_names)]
#[enum_dispatch(AllocationStrategy<T>)]
pub enum SupportedStrategy<T>
where
    T: FloatT,
{
    NorthWest(NorthWest<T>),
    Vogel(Vogel<T>),
    Russel(Russel<T>),
}

impl<T> SupportedStrategy<T>
where
    T: FloatT,
{
    /// Strategy of the given kind, sized for an `m x n` problem
    pub fn new(kind: StrategyKind, size: (usize, usize), singleton: SingletonPenalty) -> Self {
        match kind {
            StrategyKind::NorthWest => NorthWest::new(size).into(),
            StrategyKind::Vogel => Vogel::new(size, singleton).into(),
            StrategyKind::Russel => Russel::new(size).into(),
        }
    }
}

#[test]
fn test_strategy_kind_parse() {
    assert_eq!("NorthWest".parse::<StrategyKind>(), Ok(StrategyKind::NorthWest));
    assert_eq!("north-west".parse::<StrategyKind>(), Ok(StrategyKind::NorthWest));
    assert_eq!("VOGEL".parse::<StrategyKind>(), Ok(StrategyKind::Vogel));
    assert_eq!("Russel".parse::<StrategyKind>(), Ok(StrategyKind::Russel));
    assert!("russell".parse::<StrategyKind>().is_err());

    assert_eq!(StrategyKind::Vogel.to_string(), "Vogel's Approximation");
}

#[test]
fn test_dispatch_kind() {
    for kind in [StrategyKind::NorthWest, StrategyKind::Vogel, StrategyKind::Russel] {
        let s = SupportedStrategy::<f64>::new(kind, (2, 3), SingletonPenalty::Zero);
        assert_eq!(s.kind(), kind);
    }
}
