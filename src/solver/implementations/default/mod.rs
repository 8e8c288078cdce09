mod info;
mod info_print;
mod problemdata;
mod settings;
mod solution;
mod solver;

#[cfg(feature = "serde")]
mod json;

//export flattened
pub use info::*;
pub use problemdata::*;
pub use settings::*;
pub use solution::*;
pub use solver::*;
