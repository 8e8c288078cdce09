use super::*;
use crate::algebra::*;
use crate::io::PrintTarget;
use crate::solver::core::{SolverStatus, StrategyKind, TransportState};
use crate::timers::*;

/// Progress and termination information for the [`DefaultSolver`](super::DefaultSolver).
///
/// Also owns the print target used for verbose output.

#[derive(Default, Debug)]
pub struct DefaultInfo<T> {
    pub strategy: Option<StrategyKind>,
    pub iterations: u32,
    pub total_cost: T,
    /// largest supply or demand left unallocated
    pub residual: T,
    pub solve_time: f64,
    pub status: SolverStatus,

    pub(crate) stream: PrintTarget,
}

impl<T> DefaultInfo<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self, strategy: StrategyKind, timers: &mut Timers) {
        self.strategy = Some(strategy);
        self.status = SolverStatus::Unsolved;
        self.iterations = 0;
        self.total_cost = T::zero();
        self.residual = T::zero();
        self.solve_time = 0f64;

        timers.reset_timer("solve");
    }

    pub(crate) fn update(&mut self, state: &TransportState<T>) {
        self.iterations += 1;
        self.total_cost = total_cost(&state.allocation, &state.costs);
    }

    pub(crate) fn finalize(
        &mut self,
        state: &TransportState<T>,
        settings: &DefaultSettings<T>,
        timers: &Timers,
    ) {
        self.total_cost = total_cost(&state.allocation, &state.costs);
        self.residual = state.residual();

        self.status = if self.residual == T::zero() {
            SolverStatus::Solved
        } else if self.residual <= settings.balance_tol {
            SolverStatus::AlmostSolved
        } else {
            SolverStatus::Unsolved
        };

        self.solve_time = timers.elapsed("solve").as_secs_f64();
    }
}

/// Σ allocation · cost over all cells
pub(crate) fn total_cost<T: FloatT>(allocation: &[T], costs: &Matrix<T>) -> T {
    allocation.dot(costs.data())
}

#[test]
fn test_total_cost() {
    let costs = Matrix::from(&[[2., 3.], [5., 7.]]);
    assert_eq!(total_cost(&[1., 0., 4., 2.], &costs), 2. + 20. + 14.);
}
