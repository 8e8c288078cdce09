//! Traits implemented by solver types that support additional
//! ways of loading and saving problems.

#[cfg(feature = "serde")]
use std::{fs::File, io};

/// Reading and writing of problem instances in JSON format.
///
/// The file holds the supply, demand and cost data together with the
/// solver settings.  Loaded problems are validated again, and a problem
/// that fails validation is reported as [`io::ErrorKind::InvalidData`].
#[cfg(feature = "serde")]
pub trait SolverJSONReadWrite: Sized {
    type SE;

    /// write the problem data and settings to a file
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error>;

    /// load a problem from a file, optionally replacing its stored settings
    fn load_from_file(file: &mut File, settings: Option<Self::SE>) -> Result<Self, io::Error>;
}
