// package together all of the following and re-export
// in a partially flattened structure :
// : error types and user settings errors
// : per-solve working state
// : allocation strategies
// : solver status and common output
// : optional io traits

pub mod strategies;
pub mod traits;

//partially flatten top level pieces

mod error_types;
mod settings;
mod solver;
mod state;
pub use error_types::*;
pub use settings::*;
pub use solver::*;
pub use state::*;
pub use strategies::StrategyKind;

#[cfg(feature = "serde")]
pub use traits::SolverJSONReadWrite;
