use super::*;
use crate::{
    algebra::*,
    solver::core::{SolverStatus, StrategyKind},
};

/// Result of a single solve of the [`DefaultSolver`](super::DefaultSolver)
#[derive(Debug, Clone)]
pub struct DefaultSolution<T> {
    /// shipped quantities in row major order, i.e. `allocation[row * ncols + col]`
    pub allocation: Vector<T>,
    /// method used to build the allocation
    pub strategy: StrategyKind,
    /// final solver status
    pub status: SolverStatus,
    /// total transportation cost of the allocation
    pub total_cost: T,
    /// number of allocation steps
    pub iterations: u32,
    /// solve time in seconds
    pub solve_time: f64,
}

impl<T> DefaultSolution<T>
where
    T: FloatT,
{
    /// Create a new `DefaultSolution` object for an `m x n` problem
    pub fn new(m: usize, n: usize, strategy: StrategyKind) -> Self {
        Self {
            allocation: Vector::zeros(m * n),
            strategy,
            status: SolverStatus::Unsolved,
            total_cost: T::nan(),
            iterations: 0,
            solve_time: 0f64,
        }
    }

    pub(crate) fn post_process(&mut self, allocation: &Vector<T>, info: &DefaultInfo<T>) {
        self.allocation.copy_from(allocation);
        self.status = info.status;
        self.total_cost = info.total_cost;
        self.iterations = info.iterations;
        self.solve_time = info.solve_time;
    }
}

impl<T> std::fmt::Display for DefaultSolution<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Initial basic feasible solution using {} method: x = {}",
            self.strategy, self.allocation
        )
    }
}

#[test]
fn test_solution_display() {
    let mut solution = DefaultSolution::<f64>::new(1, 2, StrategyKind::Russel);
    solution.allocation = Vector::from([5., 0.]);
    assert_eq!(
        solution.to_string(),
        "Initial basic feasible solution using Russel's Approximation method: x = [5, 0]"
    );
}
