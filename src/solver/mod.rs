//! transport-bfs solver main module.
//!
//! This module contains the main types and traits for building initial
//! basic feasible solutions of balanced transportation problems.
//!
//! The solver comes with a [default implementation](crate::solver::implementations::default)
//! that validates a problem once and can then build allocations with any
//! of the supported [strategies](StrategyKind).

// internal module structure
pub(crate) mod core;
pub mod implementations;

//Here we expose only part of the solver internals
//and rearrange public modules a bit to give a more
//user friendly API

//user facing errors, status and strategy selection
pub use crate::solver::core::{ProblemError, SettingsError, Side, SolverStatus};
pub use crate::solver::core::strategies::{SingletonPenalty, StrategyKind};

//building blocks for stepping through an allocation by hand
pub use crate::solver::core::strategies::{
    AllocationStrategy, NorthWest, Russel, SupportedStrategy, Vogel,
};
pub use crate::solver::core::TransportState;

//user facing traits
pub use crate::solver::core::traits;
pub use crate::solver::core::CoreSettings;

#[cfg(feature = "serde")]
pub use crate::solver::core::SolverJSONReadWrite;

pub use crate::solver::implementations::default;
pub use crate::solver::implementations::default::*;
