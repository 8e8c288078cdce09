//! __transport-bfs__ computes initial basic feasible solutions for balanced
//! transportation problems.
//!
//! A transportation problem has $m$ sources with supplies $s_i$, $n$
//! destinations with demands $d_j$ and a unit cost $c_{ij}$ for shipping
//! from source $i$ to destination $j$.  An allocation $x_{ij} \ge 0$ is
//! feasible when
//!
//! $$
//! \sum_j x_{ij} = s_i, \qquad \sum_i x_{ij} = d_j,
//! $$
//!
//! which requires the problem to be balanced, i.e. $\sum_i s_i = \sum_j d_j$.
//!
//! Three classical construction methods are provided:
//!
//! * __North-West Corner__: sweeps the cost grid in row major order and
//!   never looks at costs.
//!
//! * __Vogel's Approximation__: repeatedly picks the row or column whose two
//!   cheapest unallocated cells differ the most.
//!
//! * __Russel's Approximation__: repeatedly picks the cell with the most
//!   negative reduced cost $c_{ij} - \max_k c_{ik} - \max_k c_{kj}$.
//!
//! Only the construction phase is implemented.  There is no stepping stone
//! or MODI improvement of the returned allocation.
//!
//! __Example usage__ :
//! ```
//! use transport_bfs::algebra::*;
//! use transport_bfs::solver::*;
//!
//! let supply = Vector::from([14., 20., 16.]);
//! let demand = Vector::from([20., 15., 15.]);
//! let costs = Matrix::from(&[
//!     [11., 13., 17.],
//!     [16., 18., 14.],
//!     [21., 24., 13.],
//! ]);
//!
//! let x = solve(StrategyKind::Vogel, &supply, &demand, &costs).unwrap();
//! assert_eq!(x.as_slice(), &[14., 0., 0., 6., 14., 0., 0., 1., 15.]);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod solver;
pub(crate) mod timers;
