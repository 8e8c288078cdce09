//! __transport-bfs__ algebra module.
//!
//! Dense vector and matrix types used to describe transportation problems,
//! together with the slice math that the allocation strategies rely on.
//! All values are generic over [`FloatT`], which is implemented for `f32`
//! and `f64`.
//!
//! Both [`Vector`] and [`Matrix`] have fixed dimensions.  Checked element
//! access returns [`IndexError`], while the `Index` implementations panic
//! on out of range access.

mod error_types;
mod floats;
mod math_traits;
mod matrix;
mod vecmath;
mod vector;

pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix::*;
pub use vector::*;

#[cfg(test)]
mod tests;
