use super::*;
use crate::algebra::*;
use crate::io::ConfigurablePrintTarget;
use crate::solver::core::strategies::{
    AllocationStrategy, SingletonPenalty, StrategyKind, SupportedStrategy,
};
use crate::solver::core::{ProblemError, SolverStatus, TransportState};
use crate::timers::*;
use std::io::Write;

/// Solver for balanced transportation problems.
///
/// The problem is validated once by [`DefaultSolver::new`].  Each call to
/// [`DefaultSolver::solve`] works on fresh copies of the problem data, so
/// the same solver can be used to compare methods.
///
/// __Example usage__ :
/// ```
/// use transport_bfs::algebra::*;
/// use transport_bfs::solver::*;
///
/// let supply = Vector::from([20., 30., 25.]);
/// let demand = Vector::from([10., 25., 15., 25.]);
/// let costs = Matrix::from(&[
///     [8., 6., 10., 9.],
///     [9., 12., 13., 7.],
///     [14., 9., 16., 5.],
/// ]);
///
/// let mut solver = DefaultSolver::new(&supply, &demand, &costs, DefaultSettings::default()).unwrap();
/// let solution = solver.solve(StrategyKind::NorthWest);
///
/// assert_eq!(solution.status, SolverStatus::Solved);
/// assert_eq!(solution.allocation.len(), 12);
/// ```
pub struct DefaultSolver<T: FloatT = f64> {
    pub data: TransportationProblem<T>,
    pub info: DefaultInfo<T>,
    pub settings: DefaultSettings<T>,
    pub(crate) timers: Option<Timers>,
}

impl<T> DefaultSolver<T>
where
    T: FloatT,
{
    pub fn new(
        supply: &Vector<T>,
        demand: &Vector<T>,
        costs: &Matrix<T>,
        settings: DefaultSettings<T>,
    ) -> Result<Self, ProblemError> {
        let mut timers = Timers::default();
        let output;

        timeit! {timers => "setup"; {
            output = TransportationProblem::new(supply, demand, costs, &settings);
        }}

        Ok(Self {
            data: output?,
            info: DefaultInfo::new(),
            settings,
            timers: Some(timers),
        })
    }

    /// Build an initial basic feasible solution with the chosen method.
    ///
    /// The settings are checked again first, since they may have been
    /// changed after construction.  Invalid settings end the solve with
    /// [`SolverStatus::InvalidSettings`] and an empty allocation.
    pub fn solve(&mut self, kind: StrategyKind) -> DefaultSolution<T> {
        // timers is stored as an option so that we can swap it out
        // while we pass the rest of the solver around
        let mut timers = self.timers.take().unwrap_or_default();

        let (m, n) = self.data.size();
        let mut solution = DefaultSolution::new(m, n, kind);

        // print failures are never allowed to interrupt a solve
        let _ = self.info.print_configuration(&self.settings, &self.data);
        let _ = self.info.print_status_header(&self.settings, kind);

        self.info.reset(kind, &mut timers);

        let singleton = self
            .settings
            .validate()
            .and_then(|_| self.settings.singleton_penalty());

        match singleton {
            Ok(singleton) => {
                let state = self.run_strategy(kind, singleton, &mut timers);
                self.info.finalize(&state, &self.settings, &timers);
                solution.post_process(&state.allocation, &self.info);
            }
            Err(e) => {
                self.info.status = SolverStatus::InvalidSettings;
                solution.status = SolverStatus::InvalidSettings;
                let _ = self.info.print_settings_error(&self.settings, &e);
            }
        }

        let _ = self.info.print_footer(&self.settings);

        // put the timers back
        self.timers.replace(timers);

        solution
    }

    fn run_strategy(
        &mut self,
        kind: StrategyKind,
        singleton: SingletonPenalty,
        timers: &mut Timers,
    ) -> TransportState<T> {
        let mut state;
        timeit! {timers => "solve"; {
            state = TransportState::new(&self.data.supply, &self.data.demand, &self.data.costs);
            let mut strategy = SupportedStrategy::new(kind, self.data.size(), singleton);

            while let Some(cell) = strategy.select_cell(&state) {
                let qty = state.allocate(cell);
                self.info.update(&state);
                let _ = self.info.print_status(&self.settings, cell, qty, &state);
            }
        }}
        state
    }

    /// time spent validating the problem, in seconds
    pub fn setup_time(&self) -> f64 {
        self.timers
            .as_ref()
            .map_or(0f64, |t| t.elapsed("setup").as_secs_f64())
    }
}

impl<T> ConfigurablePrintTarget for DefaultSolver<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.info.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.info.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.info.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.info.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.info.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.info.get_print_buffer()
    }
}

/// Flattened row major allocation for a problem, using default settings.
///
/// Shorthand for building a [`DefaultSolver`] and keeping only the
/// allocation of a single solve.
pub fn solve<T: FloatT>(
    kind: StrategyKind,
    supply: &Vector<T>,
    demand: &Vector<T>,
    costs: &Matrix<T>,
) -> Result<Vector<T>, ProblemError> {
    let mut solver = DefaultSolver::new(supply, demand, costs, DefaultSettings::default())?;
    Ok(solver.solve(kind).allocation)
}
